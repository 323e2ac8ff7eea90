use kernel::prelude::entity::{DestructVehicle, Vehicle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDto {
    pub id: String,
    pub plate: String,
    pub year: i32,
    pub model: String,
}

impl From<Vehicle> for VehicleDto {
    fn from(value: Vehicle) -> Self {
        let DestructVehicle {
            id,
            plate,
            year,
            model,
        } = value.into_destruct();
        Self {
            id: id.into(),
            plate: plate.into(),
            year: year.into(),
            model: model.into(),
        }
    }
}

pub struct RegisterVehicleDto {
    pub id: Option<String>,
    pub plate: String,
    pub year: i32,
    pub model: String,
}

pub struct UpdateVehicleDto {
    pub id: String,
    pub plate: Option<String>,
    pub year: Option<i32>,
    pub model: Option<String>,
}

pub struct GetVehicleDto {
    pub id: String,
}

#[derive(Default)]
pub struct FindVehiclesDto {
    pub id: Option<String>,
    pub plate: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

pub struct DeleteVehicleDto {
    pub id: String,
}
