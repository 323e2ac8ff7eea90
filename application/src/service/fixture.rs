use time::macros::date;

use driver::config::default_rent_contracts;
use driver::module::AppModule;
use kernel::interface::catalog::RentContractCatalog;
use kernel::prelude::entity::DriverLicenseType;
use kernel::KernelError;

use crate::service::{RegisterCourierService, RegisterVehicleService};
use crate::transfer::{CourierDto, RegisterCourierDto, RegisterVehicleDto, VehicleDto};

pub(crate) fn module() -> error_stack::Result<AppModule, KernelError> {
    Ok(AppModule::with_catalog(RentContractCatalog::new(
        default_rent_contracts(),
    )?))
}

pub(crate) async fn vehicle(
    module: &AppModule,
    plate: &str,
) -> error_stack::Result<VehicleDto, KernelError> {
    module
        .register_vehicle(RegisterVehicleDto {
            id: None,
            plate: plate.to_string(),
            year: 2022,
            model: "Mottu Sport".to_string(),
        })
        .await
}

/// `seed` keeps tax and license numbers unique across couriers of one module.
pub(crate) async fn courier(
    module: &AppModule,
    seed: u8,
    license_type: Option<DriverLicenseType>,
) -> error_stack::Result<CourierDto, KernelError> {
    module
        .register_courier(RegisterCourierDto {
            id: format!("courier-{seed}"),
            name: format!("Courier {seed}"),
            tax_number: format!("{seed:014}"),
            birth_date: date!(1990 - 05 - 17),
            license_number: format!("CNH-{seed}"),
            license_type,
            license_image_base64: "aW1hZ2U=".to_string(),
        })
        .await
}
