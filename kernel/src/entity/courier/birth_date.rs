use serde::{Deserialize, Serialize};
use time::{Date, Month};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct BirthDate(Date);

impl BirthDate {
    pub const ADULT_AGE: i32 = 18;

    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Whether the holder has turned [`Self::ADULT_AGE`] on or before `today`.
    pub fn is_adult_at(&self, today: Date) -> bool {
        match years_before(today, Self::ADULT_AGE) {
            Some(limit) => self.0 <= limit,
            None => false,
        }
    }
}

fn years_before(date: Date, years: i32) -> Option<Date> {
    let year = date.year() - years;
    Date::from_calendar_date(year, date.month(), date.day())
        .ok()
        // 29 February on a non-leap year
        .or_else(|| Date::from_calendar_date(year, Month::February, 28).ok())
}
