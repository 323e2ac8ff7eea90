use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Company registration number (CNPJ), 14 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct TaxNumber(String);

impl TaxNumber {
    pub const LENGTH: usize = 14;

    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn is_well_formed(&self) -> bool {
        !self.0.trim().is_empty() && self.0.chars().count() == Self::LENGTH
    }
}
