//! Domain layer: vehicles, the fee schedule, charge types and ports.

pub mod ports;
pub mod tariff;
pub mod vehicle;

pub use ports::HolidayOracle;
pub use tariff::{
    DayCharge, Fee, FeeBand, FeeSchedule, FeeWindow, TollBreakdown, FEE_BANDS, MAX_DAILY_FEE,
    WINDOW_MINUTES,
};
pub use vehicle::{ParseCategoryError, Vehicle, VehicleCategory, VehicleExemption};

pub use crate::shared::errors::{TollError, TollResult};
