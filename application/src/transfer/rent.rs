use kernel::prelude::entity::{DestructRent, Rent, RentStatus};
use rust_decimal::Decimal;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentDto {
    pub id: String,
    pub vehicle_id: String,
    pub courier_id: String,
    pub plan: i32,
    pub started_at: OffsetDateTime,
    pub estimated_end_at: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
    pub daily_rate: Decimal,
    pub early_return_penalty_rate: Decimal,
    pub late_return_daily_fee: Decimal,
    pub status: RentStatus,
}

impl From<Rent> for RentDto {
    fn from(value: Rent) -> Self {
        let DestructRent {
            id,
            vehicle_id,
            courier_id,
            plan,
            started_at,
            estimated_end_at,
            returned_at,
            terms,
            status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            vehicle_id: vehicle_id.into(),
            courier_id: courier_id.into(),
            plan: plan.into(),
            started_at: started_at.into(),
            estimated_end_at: estimated_end_at.into(),
            returned_at: returned_at.map(Into::into),
            daily_rate: (*terms.daily_rate()).into(),
            early_return_penalty_rate: (*terms.early_return_penalty_rate()).into(),
            late_return_daily_fee: (*terms.late_return_daily_fee()).into(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedRentDto {
    pub rent: RentDto,
    pub total_cost: Decimal,
}

pub struct CreateRentDto {
    pub id: Option<String>,
    pub courier_id: String,
    pub vehicle_id: String,
    pub plan: i32,
}

pub struct CompleteRentDto {
    pub id: String,
    pub returned_at: OffsetDateTime,
}

pub struct GetRentDto {
    pub id: String,
}

pub struct GetRentsFromCourierDto {
    pub courier_id: String,
}
