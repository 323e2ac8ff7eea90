mod birth_date;
mod id;
mod license;
mod name;
mod tax_number;

pub use self::{birth_date::*, id::*, license::*, name::*, tax_number::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Courier {
    id: CourierId,
    name: CourierName,
    tax_number: TaxNumber,
    birth_date: BirthDate,
    license_number: DriverLicenseNumber,
    license_type: Option<DriverLicenseType>,
    license_image: DriverLicenseImageId,
}

impl Courier {
    pub fn new(
        id: CourierId,
        name: CourierName,
        tax_number: TaxNumber,
        birth_date: BirthDate,
        license_number: DriverLicenseNumber,
        license_type: Option<DriverLicenseType>,
        license_image: DriverLicenseImageId,
    ) -> Self {
        Self {
            id,
            name,
            tax_number,
            birth_date,
            license_number,
            license_type,
            license_image,
        }
    }

    /// Only category A holders (A or AB) may rent a vehicle.
    pub fn can_rent(&self) -> bool {
        self.license_type
            .is_some_and(|license_type| license_type.covers_motorcycles())
    }
}
