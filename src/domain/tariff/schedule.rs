//! Time-of-day fee schedule
//!
//! The fee table is an ordered list of inclusive minute ranges. Lookups walk
//! the list top to bottom and the first band containing the minute wins.
//! Two bands overlap in the afternoon (15:00–15:29 and 15:00–16:59), so the
//! order of [`FEE_BANDS`] is significant.

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// Fee amount in whole currency units
pub type Fee = u32;

/// Minutes since midnight
pub type MinuteOfDay = u16;

pub const fn minute_of_day(hour: u16, minute: u16) -> MinuteOfDay {
    hour * 60 + minute
}

/// A time-of-day range mapped to a fixed fee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBand {
    /// First minute covered by the band
    pub start: MinuteOfDay,
    /// Last minute covered by the band (inclusive)
    pub end: MinuteOfDay,
    pub fee: Fee,
}

impl FeeBand {
    pub const fn new(start: (u16, u16), end: (u16, u16), fee: Fee) -> Self {
        Self {
            start: minute_of_day(start.0, start.1),
            end: minute_of_day(end.0, end.1),
            fee,
        }
    }

    pub fn contains(&self, minute: MinuteOfDay) -> bool {
        (self.start..=self.end).contains(&minute)
    }
}

impl fmt::Display for FeeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02} => {}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60,
            self.fee
        )
    }
}

/// Published fee bands, in priority order.
pub const FEE_BANDS: &[FeeBand] = &[
    FeeBand::new((6, 0), (6, 29), 8),
    FeeBand::new((6, 30), (6, 59), 13),
    FeeBand::new((7, 0), (7, 59), 18),
    FeeBand::new((8, 0), (8, 29), 13),
    FeeBand::new((8, 30), (14, 59), 8),
    FeeBand::new((15, 0), (15, 29), 13),
    // Overlaps the band above; only 15:30–16:59 is reachable.
    FeeBand::new((15, 0), (16, 59), 18),
    FeeBand::new((17, 0), (17, 59), 13),
    FeeBand::new((18, 0), (18, 29), 8),
];

/// Maps a time of day to a fee. Times outside every band are free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    bands: &'static [FeeBand],
}

impl FeeSchedule {
    pub fn bands(&self) -> &'static [FeeBand] {
        self.bands
    }

    /// First band covering `time`, at minute granularity.
    pub fn band_for(&self, time: NaiveTime) -> Option<&'static FeeBand> {
        // hour() < 24 and minute() < 60, so this always fits
        let minute = minute_of_day(time.hour() as u16, time.minute() as u16);
        self.bands.iter().find(|band| band.contains(minute))
    }

    pub fn fee(&self, time: NaiveTime) -> Fee {
        self.band_for(time).map(|band| band.fee).unwrap_or(0)
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self { bands: FEE_BANDS }
    }
}
