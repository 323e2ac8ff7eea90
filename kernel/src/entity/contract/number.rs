use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct ContractNumber(i32);

impl ContractNumber {
    pub fn new(number: impl Into<i32>) -> Self {
        Self(number.into())
    }
}
