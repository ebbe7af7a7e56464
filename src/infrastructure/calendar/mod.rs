//! Holiday oracles backing the calculator

pub mod public_holidays;
pub mod weekend;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::{CalendarKind, HolidayConfig};
use crate::domain::HolidayOracle;

pub use public_holidays::{easter_sunday, public_holidays, PublicHoliday, PublicHolidayCalendar};
pub use weekend::WeekendCalendar;

/// Build the oracle selected in the `[holidays]` config section.
pub fn holiday_oracle_from_config(config: &HolidayConfig) -> Arc<dyn HolidayOracle> {
    match config.calendar {
        CalendarKind::Weekend if config.extra_dates.is_empty() => Arc::new(WeekendCalendar),
        CalendarKind::Weekend => {
            let extra = config.extra_dates.clone();
            Arc::new(move |date: NaiveDate| weekend::is_weekend(date) || extra.contains(&date))
        }
        CalendarKind::Public => Arc::new(PublicHolidayCalendar::with_extra_dates(
            config.extra_dates.iter().copied(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn weekend_config_ignores_public_holidays() {
        let oracle = holiday_oracle_from_config(&HolidayConfig::default());
        assert!(!oracle.is_toll_free_date(ymd(2023, 12, 25)));
        assert!(oracle.is_toll_free_date(ymd(2023, 12, 24)));
    }

    #[test]
    fn weekend_config_honours_extra_dates() {
        let config = HolidayConfig {
            calendar: CalendarKind::Weekend,
            extra_dates: vec![ymd(2023, 3, 15)],
        };
        let oracle = holiday_oracle_from_config(&config);
        assert!(oracle.is_toll_free_date(ymd(2023, 3, 15)));
        assert!(!oracle.is_toll_free_date(ymd(2023, 3, 16)));
    }

    #[test]
    fn public_config_includes_holidays() {
        let config = HolidayConfig {
            calendar: CalendarKind::Public,
            extra_dates: Vec::new(),
        };
        let oracle = holiday_oracle_from_config(&config);
        assert!(oracle.is_toll_free_date(ymd(2023, 12, 25)));
    }
}
