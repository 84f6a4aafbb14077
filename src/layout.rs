//! Everything date-dependent that one printed sheet needs.
//!
//! A sheet shows a title and two consecutive weeks, each a row of seven day
//! columns crossed with one row per person. The drawing layer takes a
//! [`SheetLayout`] and only decides where to put things.

use serde::Serialize;

use crate::CalendarDate;
use crate::labels::Labels;
use crate::types::Weekday;
use crate::week::{WeekError, WeekKey};

/// Error type for sheet layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A sheet needs at least one person row.
    #[error("the list of names is empty")]
    NoNames,

    /// The second week of the sheet could not be formed.
    #[error(transparent)]
    Week(#[from] WeekError),
}

/// One weekday column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayColumn {
    pub date:    CalendarDate,
    pub label:   String,
    /// Sundays and public holidays are printed emphasized.
    pub red_day: bool,
}

/// Headers and day columns of one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekLayout {
    pub key:          WeekKey,
    pub header_left:  String,
    pub header_right: String,
    pub days:         Vec<DayColumn>,
}

impl WeekLayout {
    pub fn build(key: WeekKey, labels: &Labels<'_>) -> Self {
        let names = labels.names();
        let days = key
            .days()
            .map(|date| DayColumn {
                date,
                label: labels.day_column(date),
                red_day: date.weekday() == Weekday::Sunday || names.is_holiday(date),
            })
            .collect();

        Self {
            key,
            header_left: labels.week_header_left(key.week()),
            header_right: labels.week_header_right(key),
            days,
        }
    }
}

/// Title, both weeks and the person rows of one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetLayout {
    pub title: String,
    pub weeks: [WeekLayout; 2],
    pub names: Vec<String>,
}

impl SheetLayout {
    /// Lays out the sheet starting at `key`; the second week is
    /// [`WeekKey::following`] and carries its own week number.
    ///
    /// # Errors
    /// Returns `LayoutError::NoNames` for an empty `names` list and
    /// `LayoutError::Week` when the following week is out of range.
    pub fn build<S: AsRef<str>>(
        key: WeekKey,
        names: &[S],
        labels: &Labels<'_>,
    ) -> Result<Self, LayoutError> {
        if names.is_empty() {
            return Err(LayoutError::NoNames);
        }
        let second = key.following()?;
        log::trace!("laying out sheet {key} + {second} for {} names", names.len());

        Ok(Self {
            title: labels.title(key),
            weeks: [WeekLayout::build(key, labels), WeekLayout::build(second, labels)],
            names: names.iter().map(|n| n.as_ref().to_owned()).collect(),
        })
    }

    /// Every date printed on the sheet, in order.
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.weeks.iter().flat_map(|w| w.days.iter().map(|d| d.date))
    }
}
