//! Toll charge entities

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

use super::schedule::Fee;
use crate::domain::vehicle::Vehicle;

/// Upper bound on what one vehicle pays for a single calendar day
pub const MAX_DAILY_FEE: Fee = 60;

/// Passages within this many minutes of a window's first passage share one charge
pub const WINDOW_MINUTES: i64 = 60;

/// Passages charged together at the highest fee among them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeWindow {
    /// Passage that opened the window
    pub start: NaiveTime,
    /// All passages in the window, ascending
    pub passages: Vec<NaiveTime>,
    pub fee: Fee,
}

/// Charge for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCharge {
    pub date: NaiveDate,
    /// Weekend or holiday; no windows are formed on these dates
    pub toll_free: bool,
    pub windows: Vec<FeeWindow>,
    /// Sum of window fees before the daily cap
    pub subtotal: Fee,
    /// Subtotal capped at [`MAX_DAILY_FEE`]
    pub total: Fee,
}

impl DayCharge {
    pub fn toll_free(date: NaiveDate) -> Self {
        Self {
            date,
            toll_free: true,
            windows: Vec::new(),
            subtotal: 0,
            total: 0,
        }
    }

    pub fn is_capped(&self) -> bool {
        self.subtotal > self.total
    }
}

/// Detailed result of a toll calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TollBreakdown {
    pub vehicle: Vehicle,
    pub vehicle_exempt: bool,
    /// Ascending by date. Empty when the vehicle is exempt.
    pub days: Vec<DayCharge>,
    pub total: Decimal,
}

impl TollBreakdown {
    pub fn exempt(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            vehicle_exempt: true,
            days: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Number of dates that were charged (not weekend or holiday).
    pub fn charged_days(&self) -> usize {
        self.days.iter().filter(|day| !day.toll_free).count()
    }
}
