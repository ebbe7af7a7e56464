//! Application layer: services that run toll calculations.

pub mod services;

pub use services::{DailyAggregator, TollCalculator};
