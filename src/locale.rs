//! Localized names and public holidays.
//!
//! The date engine never formats text; it asks a [`LocaleNames`] value for
//! names when a label is built. A [`Locale`] is chosen at runtime (from
//! configuration) and passed explicitly to whatever needs it.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::config::ConfigError;
use crate::labels::Labels;
use crate::types::{Month, Weekday};

/// Localized names and holidays consumed when composing labels.
pub trait LocaleNames {
    fn month_name(&self, month: Month) -> &str;

    fn day_name(&self, weekday: Weekday) -> &str;

    /// Whether `date` is a public holiday, printed as a red day.
    fn is_holiday(&self, date: CalendarDate) -> bool;
}

/// Built-in locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "nb_NO")]
    NbNo,
}

const EN_US_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const EN_US_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const NB_NO_MONTHS: [&str; 12] = [
    "januar",
    "februar",
    "mars",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "desember",
];
const NB_NO_DAYS: [&str; 7] = [
    "mandag",
    "tirsdag",
    "onsdag",
    "torsdag",
    "fredag",
    "lørdag",
    "søndag",
];

impl Locale {
    pub const ALL: [Self; 2] = [Self::EnUs, Self::NbNo];

    /// Identifier in `language_TERRITORY` form
    pub const fn id(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::NbNo => "nb_NO",
        }
    }

    const fn months(self) -> &'static [&'static str; 12] {
        match self {
            Self::EnUs => &EN_US_MONTHS,
            Self::NbNo => &NB_NO_MONTHS,
        }
    }

    const fn days(self) -> &'static [&'static str; 7] {
        match self {
            Self::EnUs => &EN_US_DAYS,
            Self::NbNo => &NB_NO_DAYS,
        }
    }
}

impl LocaleNames for Locale {
    fn month_name(&self, month: Month) -> &str {
        self.months()[usize::from(month.number() - 1)]
    }

    fn day_name(&self, weekday: Weekday) -> &str {
        self.days()[usize::from(weekday.days_from_monday())]
    }

    fn is_holiday(&self, _date: CalendarDate) -> bool {
        false
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    /// Accepts `en_US`/`nb_NO`, with `-` in place of `_` and in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|locale| locale.id().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ConfigError::UnknownLocale(s.trim().to_owned()))
    }
}

/// A locale together with the holidays of the region it is printed for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    locale:   Locale,
    holidays: BTreeSet<CalendarDate>,
}

impl Calendar {
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
            holidays: BTreeSet::new(),
        }
    }

    /// A calendar flagging every date in `holidays` as a red day.
    pub fn with_holidays(locale: Locale, holidays: impl IntoIterator<Item = CalendarDate>) -> Self {
        let holidays: BTreeSet<CalendarDate> = holidays.into_iter().collect();
        log::debug!("{locale} calendar with {} holidays", holidays.len());
        Self { locale, holidays }
    }

    pub fn add_holiday(&mut self, date: CalendarDate) -> bool {
        self.holidays.insert(date)
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub fn holidays(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.holidays.iter().copied()
    }

    /// Label builder using this calendar's names and the locale's formats.
    pub fn labels(&self) -> Labels<'_> {
        Labels::new(self.locale, self)
    }
}

impl LocaleNames for Calendar {
    fn month_name(&self, month: Month) -> &str {
        self.locale.month_name(month)
    }

    fn day_name(&self, weekday: Weekday) -> &str {
        self.locale.day_name(weekday)
    }

    fn is_holiday(&self, date: CalendarDate) -> bool {
        self.holidays.contains(&date)
    }
}
