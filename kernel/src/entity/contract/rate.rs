use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DailyRate(Decimal);

impl DailyRate {
    pub fn new(rate: impl Into<Decimal>) -> Self {
        Self(rate.into())
    }
}

/// Multiplier applied to the daily rate for every day a rental is returned ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct EarlyReturnPenaltyRate(Decimal);

impl EarlyReturnPenaltyRate {
    pub fn new(rate: impl Into<Decimal>) -> Self {
        Self(rate.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct LateReturnDailyFee(Decimal);

impl LateReturnDailyFee {
    pub fn new(fee: impl Into<Decimal>) -> Self {
        Self(fee.into())
    }
}
