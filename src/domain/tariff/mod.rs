//! Tariff aggregate
//!
//! Contains the fee schedule, the daily cap, and the charge types produced
//! by a toll calculation.

pub mod model;
pub mod schedule;

pub use model::{DayCharge, FeeWindow, TollBreakdown, MAX_DAILY_FEE, WINDOW_MINUTES};
pub use schedule::{minute_of_day, Fee, FeeBand, FeeSchedule, MinuteOfDay, FEE_BANDS};
