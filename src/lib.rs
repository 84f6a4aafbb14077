mod attribution;
mod batch;
mod config;
mod consts;
mod labels;
mod layout;
mod locale;
mod prelude;
mod range;
mod span;
mod types;
mod week;

pub use attribution::{AttributedWeek, AttributionRule, attribute_week, week_number_for_date};
pub use batch::{BatchError, BatchRequest, PlannedSheet, plan_sheets};
pub use config::{
    CalendarConfig, ConfigError, DRAWING_VAR, LOCALE_VAR, NAMES_VAR, PAPER_SIZE_VAR, PaperSize,
    parse_names,
};
pub use consts::*;
pub use labels::{Labels, capitalize};
pub use layout::{DayColumn, LayoutError, SheetLayout, WeekLayout};
pub use locale::{Calendar, Locale, LocaleNames};
pub use range::{DateRange, Days, RangeError, days};
pub use span::{MonthSpan, title_months};
pub use types::{Month, Weekday, Year, days_in_month, is_leap_year};
pub use week::{IsoWeek, WeekError, WeekKey, current_year, monday_of, sunday_of, weeks_in_year};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Days from 0001-01-01 (day 1 of the common era) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// A civil (year, month, day) date with no time of day or timezone.
///
/// Stored as a day number counted from 1970-01-01 and always within
/// `0001-01-01..=9999-12-31`, so every value is a valid Gregorian date and
/// arithmetic carries overflow into the next month or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(i32);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Date arithmetic left the range {:04}-01-01..={:04}-12-31", MIN_YEAR, MAX_YEAR)]
    OutOfRange,
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// 0001-01-01
    pub const MIN: Self = Self(days_from_civil(MIN_YEAR as i32, JANUARY, MIN_DAY));
    /// 9999-12-31
    pub const MAX: Self = Self(days_from_civil(MAX_YEAR as i32, DECEMBER, 31));

    /// Creates a date from its components, rejecting anything that is not a
    /// valid Gregorian date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Self::from_parts(year, month, day)
    }

    /// Creates a date from already validated year and month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, DateError> {
        if day < MIN_DAY || day > month.days_in(year.get()) {
            return Err(DateError::InvalidDay {
                month: month.number(),
                day,
                year: year.get(),
            });
        }
        Ok(Self(days_from_civil(i32::from(year.get()), month.number(), day)))
    }

    /// Creates a date from a day number counted from 1970-01-01.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` outside `MIN..=MAX`.
    pub const fn from_day_number(days: i32) -> Result<Self, DateError> {
        if days < Self::MIN.0 || days > Self::MAX.0 {
            return Err(DateError::OutOfRange);
        }
        Ok(Self(days))
    }

    /// Caller guarantees `days` lies in `MIN..=MAX`.
    pub(crate) const fn from_day_number_unchecked(days: i32) -> Self {
        debug_assert!(days >= Self::MIN.0 && days <= Self::MAX.0);
        Self(days)
    }

    /// Days since 1970-01-01 (negative before it)
    #[inline]
    pub const fn day_number(self) -> i32 {
        self.0
    }

    /// The local date of the system clock.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the clock reports a year past 9999.
    pub fn today() -> Result<Self, DateError> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    pub const fn year(self) -> u16 {
        civil_from_days(self.0).0 as u16
    }

    pub const fn month(self) -> Month {
        Month::ALL[(civil_from_days(self.0).1 - 1) as usize]
    }

    pub const fn day(self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Day of the year, 1-based
    pub const fn ordinal(self) -> u16 {
        (self.0 - days_from_civil(self.year() as i32, JANUARY, MIN_DAY) + 1) as u16
    }

    pub const fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday, three days after a Monday.
        Weekday::from_days_from_monday((self.0 + 3).rem_euclid(7) as u8)
    }

    /// The ISO 8601 week-numbering year and week of this date.
    pub fn iso_week(self) -> IsoWeek {
        IsoWeek::of(self)
    }

    /// Moves by `days` (negative moves backwards), or `None` when the result
    /// would leave `MIN..=MAX`.
    pub const fn checked_add_days(self, days: i32) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(n) if n >= Self::MIN.0 && n <= Self::MAX.0 => Some(Self(n)),
            _ => None,
        }
    }

    /// Caller guarantees the result stays inside `MIN..=MAX`.
    pub(crate) const fn add_days_unchecked(self, days: i32) -> Self {
        Self::from_day_number_unchecked(self.0 + days)
    }

    /// Signed number of days from `self` to `other`
    pub const fn days_until(self, other: Self) -> i32 {
        other.0 - self.0
    }

    /// Every day from `self` through `end`, inclusive.
    pub const fn days_through(self, end: Self) -> Days {
        range::days(self, end)
    }

    fn parse_component<T: FromStr>(part: &str, width: usize, original: &str) -> Result<T, DateError> {
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(original.to_owned()));
        }
        part.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(original.to_owned()))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = civil_from_days(self.0);
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses the ISO 8601 calendar form `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };

        let year: u16 = Self::parse_component(year, 4, trimmed)?;
        let month: u8 = Self::parse_component(month, 2, trimmed)?;
        let day: u8 = Self::parse_component(day, 2, trimmed)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;
        Self::from_day_number(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
    }
}

impl TryFrom<CalendarDate> for chrono::NaiveDate {
    type Error = DateError;

    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        Self::from_num_days_from_ce_opt(date.0 + UNIX_EPOCH_DAYS_FROM_CE).ok_or(DateError::OutOfRange)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// --- civil date <-> day number ---
//
// Proleptic Gregorian, counted in 400-year eras of 146 097 days with years
// starting on March 1st so the leap day is the last day of the year.

const DAYS_PER_ERA: i32 = 146_097;
const EPOCH_SHIFT: i32 = 719_468;

const fn days_from_civil(year: i32, month: u8, day: u8) -> i32 {
    let month = month as i32;
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let march_month = (month + 9) % 12;
    let day_of_year = (153 * march_month + 2) / 5 + day as i32 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
}

const fn civil_from_days(days: i32) -> (i32, u8, u8) {
    let shifted = days + EPOCH_SHIFT;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let march_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * march_month + 2) / 5 + 1) as u8;
    let month = if march_month < 10 { march_month + 3 } else { march_month - 9 } as u8;
    let year = year_of_era + era * 400;
    (if month <= 2 { year + 1 } else { year }, month, day)
}
