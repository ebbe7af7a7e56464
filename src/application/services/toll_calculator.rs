//! Toll calculation service
//!
//! Orchestrates a calculation: validates the passages, short-circuits
//! toll-free vehicles, splits passages per calendar date, asks the
//! [`HolidayOracle`] about each date and sums the capped day fees.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::daily_aggregator::DailyAggregator;
use crate::config::AppConfig;
use crate::domain::{
    DayCharge, HolidayOracle, TollBreakdown, TollError, TollResult, Vehicle, VehicleExemption,
};
use crate::infrastructure::holiday_oracle_from_config;

/// Service computing the toll owed for a set of passages
#[derive(Clone)]
pub struct TollCalculator {
    exemption: VehicleExemption,
    aggregator: DailyAggregator,
    holidays: Arc<dyn HolidayOracle>,
}

impl TollCalculator {
    pub fn new(holidays: Arc<dyn HolidayOracle>) -> Self {
        Self {
            exemption: VehicleExemption::default(),
            aggregator: DailyAggregator::default(),
            holidays,
        }
    }

    pub fn with_exemption(mut self, exemption: VehicleExemption) -> Self {
        self.exemption = exemption;
        self
    }

    /// Calculator wired from the `[exemptions]` and `[holidays]` sections.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(holiday_oracle_from_config(&config.holidays))
            .with_exemption(config.exemptions.to_exemption())
    }

    pub fn is_toll_free_vehicle(&self, vehicle: &Vehicle) -> bool {
        self.exemption.is_toll_free(vehicle)
    }

    /// Total toll for `passages`.
    ///
    /// # Errors
    /// [`TollError::InvalidArgument`] when `passages` is empty, whatever the
    /// vehicle.
    pub fn calculate_toll_fee(
        &self,
        vehicle: &Vehicle,
        passages: &[NaiveDateTime],
    ) -> TollResult<Decimal> {
        if passages.is_empty() {
            return Err(TollError::empty_passages());
        }

        if self.is_toll_free_vehicle(vehicle) {
            debug!(category = %vehicle.category, "Toll-free vehicle");
            return Ok(Decimal::ZERO);
        }

        let mut total: u64 = 0;
        for (date, times) in group_by_date(passages) {
            if self.holidays.is_toll_free_date(date) {
                debug!(%date, passages = times.len(), "Toll-free date skipped");
                continue;
            }
            let day_fee = self.aggregator.compute_day_fee(&times);
            debug!(%date, passages = times.len(), day_fee, "Day fee calculated");
            total += u64::from(day_fee);
        }

        let total = Decimal::from(total);
        info!(
            category = %vehicle.category,
            passages = passages.len(),
            %total,
            "Toll fee calculated"
        );
        Ok(total)
    }

    /// Same calculation as [`calculate_toll_fee`](Self::calculate_toll_fee),
    /// itemised per date and window.
    pub fn calculate_toll_breakdown(
        &self,
        vehicle: &Vehicle,
        passages: &[NaiveDateTime],
    ) -> TollResult<TollBreakdown> {
        if passages.is_empty() {
            return Err(TollError::empty_passages());
        }

        if self.is_toll_free_vehicle(vehicle) {
            return Ok(TollBreakdown::exempt(*vehicle));
        }

        let days: Vec<DayCharge> = group_by_date(passages)
            .into_iter()
            .map(|(date, times)| {
                if self.holidays.is_toll_free_date(date) {
                    DayCharge::toll_free(date)
                } else {
                    self.aggregator.day_charge(date, &times)
                }
            })
            .collect();

        let total = days
            .iter()
            .map(|day| Decimal::from(day.total))
            .sum::<Decimal>();

        info!(
            category = %vehicle.category,
            days = days.len(),
            %total,
            "Toll breakdown calculated"
        );

        Ok(TollBreakdown {
            vehicle: *vehicle,
            vehicle_exempt: false,
            days,
            total,
        })
    }
}

impl Default for TollCalculator {
    fn default() -> Self {
        Self::new(Arc::new(crate::infrastructure::WeekendCalendar))
    }
}

impl std::fmt::Debug for TollCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TollCalculator")
            .field("exemption", &self.exemption)
            .field("aggregator", &self.aggregator)
            .finish_non_exhaustive()
    }
}

/// Passage times keyed by calendar date, dates ascending.
fn group_by_date(passages: &[NaiveDateTime]) -> BTreeMap<NaiveDate, Vec<NaiveTime>> {
    let mut days: BTreeMap<NaiveDate, Vec<NaiveTime>> = BTreeMap::new();
    for passage in passages {
        days.entry(passage.date()).or_default().push(passage.time());
    }
    days
}

// ── Tests ──────────────────────────────────────────────────────
