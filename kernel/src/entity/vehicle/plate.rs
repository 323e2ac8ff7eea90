use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehiclePlate(String);

impl VehiclePlate {
    pub fn new(plate: impl Into<String>) -> Self {
        Self(plate.into())
    }
}
