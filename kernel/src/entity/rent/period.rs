use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, Time, UtcOffset};
use vodca::{AsRefln, Fromln};

use crate::entity::ContractDuration;
use crate::KernelError;

/// Start of a rental. Always midnight UTC.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct RentStartedAt(OffsetDateTime);

impl RentStartedAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    /// Midnight UTC of the day following `now`.
    pub fn tomorrow_of(now: OffsetDateTime) -> Self {
        let tomorrow = now.to_offset(UtcOffset::UTC).date() + Duration::days(1);
        Self(tomorrow.with_time(Time::MIDNIGHT).assume_utc())
    }

    /// Fails with [`KernelError::Internal`] when the end falls outside the supported calendar.
    pub fn estimate_end(
        &self,
        duration: &ContractDuration,
    ) -> error_stack::Result<EstimatedEndAt, KernelError> {
        self.0
            .checked_add(duration.to_duration())
            .map(EstimatedEndAt::new)
            .ok_or_else(|| {
                Report::new(KernelError::Internal)
                    .attach_printable("Estimated end date is out of range")
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct EstimatedEndAt(OffsetDateTime);

impl EstimatedEndAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }
}

#[cfg(test)]
mod test {
    use time::macros::{datetime, offset};

    use super::RentStartedAt;

    #[test]
    fn tomorrow_is_next_utc_midnight() {
        let start = RentStartedAt::tomorrow_of(datetime!(2024-02-28 23:59 UTC));
        assert_eq!(start, RentStartedAt::new(datetime!(2024-02-29 00:00 UTC)));

        // 2024-03-01 01:00 at -03:00 is already 04:00 UTC on the same day
        let start = RentStartedAt::tomorrow_of(datetime!(2024-03-01 01:00).assume_offset(offset!(-3)));
        assert_eq!(start, RentStartedAt::new(datetime!(2024-03-02 00:00 UTC)));
    }
}
