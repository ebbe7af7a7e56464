//! # Congestion toll calculator
//!
//! Computes the congestion toll owed by a vehicle for a set of timestamped
//! toll-point passages.
//!
//! ## Architecture
//!
//! - **domain**: vehicles, the fee schedule, charge types and the
//!   [`HolidayOracle`] port
//! - **application**: the per-day aggregator and the [`TollCalculator`] service
//! - **infrastructure**: holiday calendars implementing the oracle
//! - **config** / **telemetry**: TOML settings and tracing setup
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::NaiveDateTime;
//! use toll_calculator::{TollCalculator, Vehicle, WeekendCalendar};
//!
//! let calculator = TollCalculator::new(Arc::new(WeekendCalendar));
//! let passage = NaiveDateTime::parse_from_str("2023-01-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
//! let fee = calculator.calculate_toll_fee(&Vehicle::car(), &[passage]).unwrap();
//! assert_eq!(fee.to_string(), "13");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod telemetry;

pub use application::{DailyAggregator, TollCalculator};
pub use config::{default_config_path, AppConfig};
pub use domain::{
    DayCharge, FeeSchedule, FeeWindow, HolidayOracle, TollBreakdown, TollError, TollResult,
    Vehicle, VehicleCategory, VehicleExemption,
};
pub use infrastructure::{PublicHolidayCalendar, WeekendCalendar};
pub use shared::errors::ConfigError;
pub use telemetry::init_tracing;
