use kernel::prelude::entity::{Courier, DestructCourier, DriverLicenseType};
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourierDto {
    pub id: String,
    pub name: String,
    pub tax_number: String,
    pub birth_date: Date,
    pub license_number: String,
    pub license_type: Option<DriverLicenseType>,
    pub license_image_id: String,
}

impl From<Courier> for CourierDto {
    fn from(value: Courier) -> Self {
        let DestructCourier {
            id,
            name,
            tax_number,
            birth_date,
            license_number,
            license_type,
            license_image,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            tax_number: tax_number.into(),
            birth_date: birth_date.into(),
            license_number: license_number.into(),
            license_type,
            license_image_id: license_image.into(),
        }
    }
}

pub struct RegisterCourierDto {
    pub id: String,
    pub name: String,
    pub tax_number: String,
    pub birth_date: Date,
    pub license_number: String,
    pub license_type: Option<DriverLicenseType>,
    pub license_image_base64: String,
}

#[derive(Default)]
pub struct UpdateCourierDto {
    pub id: String,
    pub name: Option<String>,
    pub tax_number: Option<String>,
    pub birth_date: Option<Date>,
    pub license_number: Option<String>,
    pub license_type: Option<DriverLicenseType>,
    pub license_image_base64: Option<String>,
}
