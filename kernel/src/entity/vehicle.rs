mod id;
mod model;
mod plate;
mod year;

pub use self::{id::*, model::*, plate::*, year::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Vehicle {
    id: VehicleId,
    plate: VehiclePlate,
    year: VehicleYear,
    model: VehicleModel,
}

impl Vehicle {
    pub fn new(id: VehicleId, plate: VehiclePlate, year: VehicleYear, model: VehicleModel) -> Self {
        Self {
            id,
            plate,
            year,
            model,
        }
    }
}
