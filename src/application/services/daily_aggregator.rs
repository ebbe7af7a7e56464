//! Per-day fee aggregation
//!
//! Passages are grouped into windows anchored at the passage that opened
//! them: a later passage joins the window when it is at most
//! [`WINDOW_MINUTES`] after the anchor, regardless of how close it is to the
//! previous passage. Each window is charged its highest fee and the day's
//! sum is capped at [`MAX_DAILY_FEE`].

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::domain::{DayCharge, Fee, FeeSchedule, FeeWindow, MAX_DAILY_FEE, WINDOW_MINUTES};

#[derive(Debug, Clone)]
pub struct DailyAggregator {
    schedule: FeeSchedule,
    window: Duration,
    daily_cap: Fee,
}

impl DailyAggregator {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self {
            schedule,
            window: Duration::minutes(WINDOW_MINUTES),
            daily_cap: MAX_DAILY_FEE,
        }
    }

    fn in_window(&self, anchor: NaiveTime, time: NaiveTime) -> bool {
        time - anchor <= self.window
    }

    /// Capped fee for one day's passage times. Input order does not matter;
    /// an empty slice is free.
    pub fn compute_day_fee(&self, times: &[NaiveTime]) -> Fee {
        let mut sorted = times.to_vec();
        sorted.sort_unstable();

        let Some((&first, rest)) = sorted.split_first() else {
            return 0;
        };

        let mut window_start = first;
        let mut window_max = self.schedule.fee(first);
        let mut total: Fee = 0;

        for &time in rest {
            let fee = self.schedule.fee(time);
            if self.in_window(window_start, time) {
                window_max = window_max.max(fee);
            } else {
                total = total.saturating_add(window_max);
                window_start = time;
                window_max = fee;
            }
        }
        total = total.saturating_add(window_max);

        total.min(self.daily_cap)
    }

    /// The windows [`compute_day_fee`](Self::compute_day_fee) charges, ascending.
    pub fn windows(&self, times: &[NaiveTime]) -> Vec<FeeWindow> {
        let mut sorted = times.to_vec();
        sorted.sort_unstable();

        let mut windows: Vec<FeeWindow> = Vec::new();
        for time in sorted {
            let fee = self.schedule.fee(time);
            match windows.last_mut() {
                Some(window) if self.in_window(window.start, time) => {
                    window.passages.push(time);
                    window.fee = window.fee.max(fee);
                }
                _ => windows.push(FeeWindow {
                    start: time,
                    passages: vec![time],
                    fee,
                }),
            }
        }
        windows
    }

    /// Charge for a date on which tolls apply.
    pub fn day_charge(&self, date: NaiveDate, times: &[NaiveTime]) -> DayCharge {
        let windows = self.windows(times);
        let subtotal = windows
            .iter()
            .fold(0 as Fee, |sum, window| sum.saturating_add(window.fee));
        DayCharge {
            date,
            toll_free: false,
            windows,
            subtotal,
            total: self.compute_day_fee(times),
        }
    }
}

impl Default for DailyAggregator {
    fn default() -> Self {
        Self::new(FeeSchedule::default())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn day_fee(times: &[NaiveTime]) -> Fee {
        DailyAggregator::default().compute_day_fee(times)
    }

    #[test]
    fn single_passages() {
        assert_eq!(day_fee(&[t(8, 0)]), 13);
        assert_eq!(day_fee(&[t(18, 3)]), 8);
        assert_eq!(day_fee(&[t(5, 43)]), 0);
    }

    #[test]
    fn passages_within_an_hour_charge_once() {
        assert_eq!(day_fee(&[t(7, 0), t(7, 50)]), 18);
    }

    #[test]
    fn passages_over_an_hour_apart_charge_separately() {
        assert_eq!(day_fee(&[t(6, 0), t(8, 40)]), 16);
    }

    #[test]
    fn exactly_sixty_minutes_is_same_window() {
        // 8 and 18, merged
        assert_eq!(day_fee(&[t(6, 0), t(7, 0)]), 18);
    }

    #[test]
    fn sixty_one_minutes_opens_new_window() {
        assert_eq!(day_fee(&[t(6, 0), t(7, 1)]), 8 + 18);
    }

    #[test]
    fn sub_minute_overrun_opens_new_window() {
        let late = NaiveTime::from_hms_opt(8, 0, 30).unwrap();
        assert_eq!(day_fee(&[t(7, 0), late]), 18 + 13);
    }

    #[test]
    fn window_is_anchored_at_first_passage() {
        // 06:45 joins 06:00; 07:30 is 90 minutes after the anchor
        assert_eq!(day_fee(&[t(6, 0), t(6, 45), t(7, 30)]), 13 + 18);
    }

    #[test]
    fn highest_fee_in_window_wins() {
        assert_eq!(day_fee(&[t(6, 50), t(7, 10), t(7, 40)]), 18);
    }

    #[test]
    fn unsorted_input_is_sorted_first() {
        assert_eq!(day_fee(&[t(8, 40), t(6, 0)]), 16);
        assert_eq!(day_fee(&[t(7, 30), t(6, 45), t(6, 0)]), 13 + 18);
    }

    #[test]
    fn daily_total_is_capped() {
        let times = [
            t(6, 0),
            t(7, 1),
            t(8, 2),
            t(9, 3),
            t(10, 4),
            t(15, 30),
            t(16, 31),
        ];
        assert_eq!(day_fee(&times), MAX_DAILY_FEE);
    }

    #[test]
    fn empty_day_is_free() {
        assert_eq!(day_fee(&[]), 0);
        assert!(DailyAggregator::default().windows(&[]).is_empty());
    }

    #[test]
    fn windows_group_like_day_fee() {
        let aggregator = DailyAggregator::default();
        let times = [t(7, 30), t(6, 0), t(6, 45), t(15, 10), t(16, 5)];
        let windows = aggregator.windows(&times);

        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].passages, vec![t(6, 0), t(6, 45)]);
        assert_eq!(windows[0].fee, 13);
        assert_eq!(windows[1].start, t(7, 30));
        assert_eq!(windows[1].fee, 18);
        assert_eq!(windows[2].passages, vec![t(15, 10), t(16, 5)]);
        assert_eq!(windows[2].fee, 18);

        let sum: Fee = windows.iter().map(|w| w.fee).sum();
        assert_eq!(aggregator.compute_day_fee(&times), sum.min(MAX_DAILY_FEE));
    }

    #[test]
    fn windows_agree_with_day_fee_in_any_order() {
        let aggregator = DailyAggregator::default();
        let fixtures: [&[NaiveTime]; 4] = [
            &[t(6, 0), t(6, 45), t(7, 30)],
            &[t(15, 10), t(16, 5), t(17, 6), t(18, 0)],
            &[t(6, 0), t(7, 1), t(8, 2), t(9, 3), t(10, 4), t(15, 30), t(16, 31)],
            &[t(5, 0), t(6, 0), t(6, 59), t(7, 0), t(18, 29)],
        ];
        for fixture in fixtures {
            let mut times = fixture.to_vec();
            let expected = aggregator.compute_day_fee(&times);
            for shift in 0..times.len() {
                times.rotate_left(1);
                let from_windows: Fee = aggregator.windows(&times).iter().map(|w| w.fee).sum();
                assert_eq!(from_windows.min(MAX_DAILY_FEE), expected, "shift {shift}");
                assert_eq!(aggregator.compute_day_fee(&times), expected, "shift {shift}");
            }
            times.reverse();
            assert_eq!(aggregator.compute_day_fee(&times), expected);
        }
    }

    #[test]
    fn day_charge_reports_uncapped_subtotal() {
        let aggregator = DailyAggregator::default();
        let date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let times = [t(6, 0), t(7, 1), t(8, 2), t(9, 3), t(15, 30), t(16, 31)];
        let charge = aggregator.day_charge(date, &times);

        assert_eq!(charge.subtotal, 8 + 18 + 13 + 8 + 18 + 18);
        assert_eq!(charge.total, MAX_DAILY_FEE);
        assert!(charge.is_capped());
        assert!(!charge.toll_free);
    }
}
