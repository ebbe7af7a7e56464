//! Weekend-only calendar

use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::HolidayOracle;

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Treats Saturdays and Sundays as toll-free and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl HolidayOracle for WeekendCalendar {
    fn is_toll_free_date(&self, date: NaiveDate) -> bool {
        is_weekend(date)
    }
}
