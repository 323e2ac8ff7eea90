use error_stack::Report;
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime, UtcOffset};

use crate::entity::{Rent, ReturnedAt};
use crate::KernelError;

pub trait RentPricingCalculator: 'static + Sync + Send {
    /// Total cost of `rent` when it is returned at `returned_at`.
    ///
    /// Fails with [`KernelError::InvalidArgument`] when the return falls on a day
    /// before the rental started.
    fn calculate_cost(
        &self,
        rent: &Rent,
        returned_at: &ReturnedAt,
    ) -> error_stack::Result<Decimal, KernelError>;
}

pub trait DependOnRentPricingCalculator: 'static + Sync + Send {
    type RentPricingCalculator: RentPricingCalculator;
    fn rent_pricing_calculator(&self) -> &Self::RentPricingCalculator;
}

/// Bills used days at the daily rate, unused days at the early-return penalty
/// and extra days at the late fee. Partial days count as whole days.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRentPricing;

impl RentPricingCalculator for StandardRentPricing {
    fn calculate_cost(
        &self,
        rent: &Rent,
        returned_at: &ReturnedAt,
    ) -> error_stack::Result<Decimal, KernelError> {
        let started_at = *rent.started_at().as_ref();
        let estimated_end_at = *rent.estimated_end_at().as_ref();
        let returned_at = *returned_at.as_ref();

        if utc_date(returned_at) < utc_date(started_at) {
            return Err(Report::new(KernelError::InvalidArgument)
                .attach_printable("Return date must not be before the rental start date"));
        }

        let terms = rent.terms();
        let daily_rate = *terms.daily_rate().as_ref();
        let is_early = returned_at < estimated_end_at;
        let is_late = returned_at > estimated_end_at;

        let billed_until = if is_late {
            estimated_end_at
        } else {
            returned_at
        };
        let base = checked(
            Decimal::from(elapsed_days(started_at, billed_until)).checked_mul(daily_rate),
        )?;

        let early_penalty = if is_early {
            let unused = Decimal::from(elapsed_days(returned_at, estimated_end_at));
            checked(
                unused
                    .checked_mul(daily_rate)
                    .and_then(|cost| cost.checked_mul(*terms.early_return_penalty_rate().as_ref())),
            )?
        } else {
            Decimal::ZERO
        };

        let late_fee = if is_late {
            let extra = Decimal::from(elapsed_days(estimated_end_at, returned_at));
            checked(extra.checked_mul(*terms.late_return_daily_fee().as_ref()))?
        } else {
            Decimal::ZERO
        };

        let total = checked(
            base.checked_add(early_penalty)
                .and_then(|total| total.checked_add(late_fee)),
        )?;
        Ok(total.max(Decimal::ZERO))
    }
}

impl DependOnRentPricingCalculator for StandardRentPricing {
    type RentPricingCalculator = Self;
    fn rent_pricing_calculator(&self) -> &Self::RentPricingCalculator {
        self
    }
}

fn checked(value: Option<Decimal>) -> error_stack::Result<Decimal, KernelError> {
    value.ok_or_else(|| {
        Report::new(KernelError::Internal).attach_printable("Rent cost overflowed")
    })
}

fn utc_date(time: OffsetDateTime) -> time::Date {
    time.to_offset(UtcOffset::UTC).date()
}

/// Whole days between `from` and `to`, rounding any remainder up. Never negative.
fn elapsed_days(from: OffsetDateTime, to: OffsetDateTime) -> i64 {
    let elapsed = to - from;
    if elapsed <= Duration::ZERO {
        return 0;
    }
    let whole = elapsed.whole_days();
    if elapsed > Duration::days(whole) {
        whole + 1
    } else {
        whole
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use time::macros::datetime;
    use time::Duration;

    use crate::entity::{
        ContractDuration, ContractNumber, CourierId, DailyRate, EarlyReturnPenaltyRate,
        LateReturnDailyFee, Rent, RentContract, RentId, RentStartedAt, ReturnedAt, VehicleId,
    };
    use crate::KernelError;

    use super::{RentPricingCalculator, StandardRentPricing};

    fn rent(daily_rate: Decimal, duration: i32, penalty: Decimal, fee: Decimal) -> Rent {
        let contract = RentContract::new(
            ContractNumber::new(1),
            DailyRate::new(daily_rate),
            ContractDuration::new(duration),
            EarlyReturnPenaltyRate::new(penalty),
            LateReturnDailyFee::new(fee),
        );
        Rent::open(
            RentId::new("rent"),
            VehicleId::new("vehicle"),
            CourierId::new("courier"),
            &contract,
            RentStartedAt::new(datetime!(2024-03-01 00:00 UTC)),
        )
        .expect("rent within calendar")
    }

    fn weekly_plan() -> Rent {
        rent(
            Decimal::new(30, 0),
            7,
            Decimal::new(20, 2),
            Decimal::new(50, 0),
        )
    }

    fn cost(rent: &Rent, returned_at: time::OffsetDateTime) -> Decimal {
        StandardRentPricing
            .calculate_cost(rent, &ReturnedAt::new(returned_at))
            .expect("valid return date")
    }

    #[test]
    fn on_time_return_bills_the_full_duration() {
        let rent = weekly_plan();
        assert_eq!(cost(&rent, datetime!(2024-03-08 00:00 UTC)), Decimal::new(210, 0));
    }

    #[test]
    fn early_return_adds_penalty_for_unused_days() {
        let rent = weekly_plan();
        // 5 used days, 2 unused: 5 * 30 + 2 * 30 * 0.20
        assert_eq!(cost(&rent, datetime!(2024-03-06 00:00 UTC)), Decimal::new(162, 0));
    }

    #[test]
    fn late_return_adds_fee_for_extra_days() {
        let rent = weekly_plan();
        // 7 * 30 + 3 * 50
        assert_eq!(cost(&rent, datetime!(2024-03-11 00:00 UTC)), Decimal::new(360, 0));
    }

    #[test]
    fn partial_days_round_up() {
        let rent = weekly_plan();
        // 4 days and 2 hours used -> 5 days billed, 2 days and 22 hours unused -> 3 days penalised
        assert_eq!(
            cost(&rent, datetime!(2024-03-05 02:00 UTC)),
            Decimal::new(150, 0) + Decimal::new(18, 0)
        );
        // one minute late is a full late day
        assert_eq!(cost(&rent, datetime!(2024-03-08 00:01 UTC)), Decimal::new(260, 0));
    }

    #[test]
    fn return_on_start_day_only_charges_penalty() {
        let rent = weekly_plan();
        assert_eq!(cost(&rent, datetime!(2024-03-01 00:00 UTC)), Decimal::new(42, 0));
    }

    #[test]
    fn return_before_start_day_is_invalid() {
        let rent = weekly_plan();
        let result = StandardRentPricing.calculate_cost(
            &rent,
            &ReturnedAt::new(datetime!(2024-02-29 23:59 UTC)),
        );
        let report = result.expect_err("return before start must fail");
        assert_eq!(report.current_context(), &KernelError::InvalidArgument);
    }

    #[test]
    fn overflowing_cost_fails() {
        let rent = rent(Decimal::MAX, 7, Decimal::ZERO, Decimal::MAX);
        for returned_at in [
            datetime!(2024-03-08 00:00 UTC),
            datetime!(2024-03-12 00:00 UTC),
        ] {
            let report = StandardRentPricing
                .calculate_cost(&rent, &ReturnedAt::new(returned_at))
                .expect_err("cost beyond decimal range");
            assert_eq!(report.current_context(), &KernelError::Internal);
        }
    }

    #[test]
    fn total_is_never_negative() {
        let plans = [
            weekly_plan(),
            rent(Decimal::ZERO, 1, Decimal::ZERO, Decimal::ZERO),
            rent(Decimal::new(18, 0), 50, Decimal::ZERO, Decimal::new(50, 0)),
            rent(Decimal::new(28, 0), 15, Decimal::new(40, 2), Decimal::ZERO),
        ];
        let start = datetime!(2024-03-01 00:00 UTC);
        for rent in &plans {
            for hours in (0..24 * 70).step_by(7) {
                let total = cost(rent, start + Duration::hours(hours));
                assert!(total >= Decimal::ZERO, "negative total {total} after {hours}h");
            }
        }
    }
}
