//! Infrastructure layer: concrete adapters for domain ports.

pub mod calendar;

pub use calendar::{holiday_oracle_from_config, PublicHolidayCalendar, WeekendCalendar};
