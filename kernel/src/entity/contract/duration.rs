use serde::{Deserialize, Serialize};
use time::Duration;
use vodca::{AsRefln, Fromln};

/// Length of a plan in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ContractDuration(i32);

impl ContractDuration {
    /// Longest plan accepted, about a hundred years.
    pub const MAX_DAYS: i32 = 36_500;

    pub fn new(days: impl Into<i32>) -> Self {
        Self(days.into())
    }

    pub fn to_duration(&self) -> Duration {
        Duration::days(i64::from(self.0))
    }
}
