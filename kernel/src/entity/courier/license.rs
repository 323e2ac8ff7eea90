use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DriverLicenseNumber(String);

impl DriverLicenseNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverLicenseType {
    A,
    B,
    AB,
}

impl DriverLicenseType {
    pub fn covers_motorcycles(&self) -> bool {
        matches!(self, DriverLicenseType::A | DriverLicenseType::AB)
    }
}

/// Identifier returned by the image storage for the uploaded license picture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DriverLicenseImageId(String);

impl DriverLicenseImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
