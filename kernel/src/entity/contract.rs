mod duration;
mod number;
mod rate;

pub use self::{duration::*, number::*, rate::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

/// Pricing terms of a rental plan, selectable by its number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, References, Destructure)]
pub struct RentContract {
    number: ContractNumber,
    daily_rate: DailyRate,
    duration: ContractDuration,
    early_return_penalty_rate: EarlyReturnPenaltyRate,
    late_return_daily_fee: LateReturnDailyFee,
}

impl RentContract {
    pub fn new(
        number: ContractNumber,
        daily_rate: DailyRate,
        duration: ContractDuration,
        early_return_penalty_rate: EarlyReturnPenaltyRate,
        late_return_daily_fee: LateReturnDailyFee,
    ) -> Self {
        Self {
            number,
            daily_rate,
            duration,
            early_return_penalty_rate,
            late_return_daily_fee,
        }
    }
}
