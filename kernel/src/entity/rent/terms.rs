use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::{DailyRate, EarlyReturnPenaltyRate, LateReturnDailyFee, RentContract};

/// Pricing terms captured when the rental was opened.
/// Later catalog changes never reach an existing rental.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, References)]
pub struct RentTerms {
    daily_rate: DailyRate,
    early_return_penalty_rate: EarlyReturnPenaltyRate,
    late_return_daily_fee: LateReturnDailyFee,
}

impl RentTerms {
    pub fn new(
        daily_rate: DailyRate,
        early_return_penalty_rate: EarlyReturnPenaltyRate,
        late_return_daily_fee: LateReturnDailyFee,
    ) -> Self {
        Self {
            daily_rate,
            early_return_penalty_rate,
            late_return_daily_fee,
        }
    }

    pub fn snapshot(contract: &RentContract) -> Self {
        Self {
            daily_rate: *contract.daily_rate(),
            early_return_penalty_rate: *contract.early_return_penalty_rate(),
            late_return_daily_fee: *contract.late_return_daily_fee(),
        }
    }
}
