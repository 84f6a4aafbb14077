//! Week numbers attributed to the calendar year a date is printed under.
//!
//! ISO 8601 puts the last days of December into week 1 of the next year and
//! the first days of January into the last week of the previous year. A
//! calendar labelled per calendar year keeps those dates with the year on
//! the page instead.

use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::consts::DECEMBER;
use crate::types::Month;

/// Which rule produced an attributed week number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributionRule {
    /// The date's ISO week-numbering year equals its calendar year.
    Iso,
    /// A late-December date whose ISO week belongs to the next year; it takes
    /// the ISO week of December 31st of its own year.
    LastWeekOfYear,
    /// An early-January date whose ISO week belongs to the previous year; it
    /// is placed in week 1.
    FirstWeekOfYear,
}

/// A week number together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributedWeek {
    pub week: u8,
    pub rule: AttributionRule,
}

impl AttributedWeek {
    /// Whether the week number came from re-attribution at the year boundary,
    /// in which case the date need not fall inside that week of its year.
    pub const fn is_reattributed(self) -> bool {
        !matches!(self.rule, AttributionRule::Iso)
    }
}

/// Attributes `date` to a week of `date.year()`, reporting the rule applied.
pub fn attribute_week(date: CalendarDate) -> AttributedWeek {
    let year = date.year();
    let iso = date.iso_week();

    match date.month() {
        Month::December if iso.year > year => AttributedWeek {
            week: december_31(year).iso_week().week,
            rule: AttributionRule::LastWeekOfYear,
        },
        Month::January if iso.year < year => AttributedWeek {
            week: 1,
            rule: AttributionRule::FirstWeekOfYear,
        },
        _ => AttributedWeek {
            week: iso.week,
            rule: AttributionRule::Iso,
        },
    }
}

/// The week number of `date`, attributed to the calendar year `date.year()`.
pub fn week_number_for_date(date: CalendarDate) -> u8 {
    attribute_week(date).week
}

// Only called with the year of an existing date, so December 31st exists.
const fn december_31(year: u16) -> CalendarDate {
    CalendarDate::from_day_number_unchecked(crate::days_from_civil(year as i32, DECEMBER, 31))
}
