//! Public holiday calendar
//!
//! Weekends, the Swedish public holidays of each year, and any extra dates
//! supplied by configuration are toll-free. Movable feasts are derived from
//! Easter Sunday.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::weekend::is_weekend;
use crate::domain::HolidayOracle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicHoliday {
    NewYearsDay,
    Epiphany,
    GoodFriday,
    EasterMonday,
    MayDay,
    AscensionDay,
    NationalDay,
    MidsummerEve,
    ChristmasEve,
    ChristmasDay,
    BoxingDay,
    NewYearsEve,
}

impl fmt::Display for PublicHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NewYearsDay => "New Year's Day",
            Self::Epiphany => "Epiphany",
            Self::GoodFriday => "Good Friday",
            Self::EasterMonday => "Easter Monday",
            Self::MayDay => "May Day",
            Self::AscensionDay => "Ascension Day",
            Self::NationalDay => "National Day",
            Self::MidsummerEve => "Midsummer Eve",
            Self::ChristmasEve => "Christmas Eve",
            Self::ChristmasDay => "Christmas Day",
            Self::BoxingDay => "Boxing Day",
            Self::NewYearsEve => "New Year's Eve",
        };
        f.write_str(name)
    }
}

/// Easter Sunday (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    NaiveDate::from_ymd_opt(year, (n / 31) as u32, (n % 31 + 1) as u32)
}

/// Friday between 19 and 25 June.
fn midsummer_eve(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 6, 19)?
        .iter_days()
        .take(7)
        .find(|date| date.weekday() == Weekday::Fri)
}

/// All public holidays of `year`, in calendar order.
pub fn public_holidays(year: i32) -> Vec<(NaiveDate, PublicHoliday)> {
    let fixed = |month, day, holiday| NaiveDate::from_ymd_opt(year, month, day).map(|d| (d, holiday));
    let easter = easter_sunday(year);
    let from_easter = |days: i64, holiday| easter.map(|e| (e + Duration::days(days), holiday));

    let mut holidays: Vec<_> = [
        fixed(1, 1, PublicHoliday::NewYearsDay),
        fixed(1, 6, PublicHoliday::Epiphany),
        from_easter(-2, PublicHoliday::GoodFriday),
        from_easter(1, PublicHoliday::EasterMonday),
        fixed(5, 1, PublicHoliday::MayDay),
        from_easter(39, PublicHoliday::AscensionDay),
        fixed(6, 6, PublicHoliday::NationalDay),
        midsummer_eve(year).map(|d| (d, PublicHoliday::MidsummerEve)),
        fixed(12, 24, PublicHoliday::ChristmasEve),
        fixed(12, 25, PublicHoliday::ChristmasDay),
        fixed(12, 26, PublicHoliday::BoxingDay),
        fixed(12, 31, PublicHoliday::NewYearsEve),
    ]
    .into_iter()
    .flatten()
    .collect();
    holidays.sort_by_key(|(date, _)| *date);
    holidays
}

/// Weekends, public holidays and configured extra dates are toll-free.
#[derive(Debug, Clone, Default)]
pub struct PublicHolidayCalendar {
    extra_dates: BTreeSet<NaiveDate>,
}

impl PublicHolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            extra_dates: dates.into_iter().collect(),
        }
    }

    pub fn holiday_on(&self, date: NaiveDate) -> Option<PublicHoliday> {
        public_holidays(date.year())
            .into_iter()
            .find(|(day, _)| *day == date)
            .map(|(_, holiday)| holiday)
    }
}

impl HolidayOracle for PublicHolidayCalendar {
    fn is_toll_free_date(&self, date: NaiveDate) -> bool {
        is_weekend(date) || self.extra_dates.contains(&date) || self.holiday_on(date).is_some()
    }
}
