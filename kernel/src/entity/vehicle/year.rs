use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehicleYear(i32);

impl VehicleYear {
    /// Manufacture years must be strictly greater than this.
    pub const MIN_EXCLUSIVE: i32 = 1900;

    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }

    pub fn is_plausible(&self) -> bool {
        self.0 > Self::MIN_EXCLUSIVE
    }
}
