//! Planning a multi-sheet export over a span of dates.
//!
//! Each planned sheet is keyed the way a person would look the start date up
//! on a wall calendar: the start date's own year and its attributed week.

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, DEFAULT_WEEKS_SPAN};
use crate::range::{DateRange, RangeError};
use crate::week::{WeekError, WeekKey};
use crate::CalendarDate;

/// Error type for export planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// Weeks per sheet does not fit the planner.
    #[error("Invalid weeks per sheet: {0}")]
    InvalidSpan(i32),

    /// The export range is inverted.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// A sheet start has no valid week key.
    #[error(transparent)]
    Week(#[from] WeekError),
}

/// An export request, shaped like the JSON body the web form posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub from_date:  CalendarDate,
    pub to_date:    CalendarDate,
    #[serde(default)]
    pub names:      Vec<String>,
    #[serde(default)]
    pub drawing:    bool,
    /// Weeks per sheet; zero or negative selects the default of two.
    #[serde(default)]
    pub weeks_span: i32,
}

impl BatchRequest {
    /// Weeks per sheet after applying the default.
    ///
    /// # Errors
    /// Returns `BatchError::InvalidSpan` for spans above `u8::MAX`.
    pub fn effective_weeks_span(&self) -> Result<u8, BatchError> {
        if self.weeks_span <= 0 {
            return Ok(DEFAULT_WEEKS_SPAN);
        }
        u8::try_from(self.weeks_span).map_err(|_| BatchError::InvalidSpan(self.weeks_span))
    }

    /// # Errors
    /// See [`plan_sheets`] and [`BatchRequest::effective_weeks_span`].
    pub fn plan(&self) -> Result<Vec<PlannedSheet>, BatchError> {
        plan_sheets(self.from_date, self.to_date, self.effective_weeks_span()?)
    }
}

/// One sheet of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedSheet {
    pub key:       WeekKey,
    /// Days of the request this sheet covers, clipped to its end date
    pub days:      DateRange,
    pub file_name: String,
}

/// Splits `from..=to` into consecutive sheets of `weeks_span` weeks each
/// (zero selects the default). The first sheet starts at `from` and the last
/// one is clipped to end at `to`, so every day is on exactly one sheet.
///
/// # Errors
/// Returns `BatchError::Range` if `to` is before `from` and
/// `BatchError::Week` if a sheet starts in a year without week keys.
pub fn plan_sheets(
    from: CalendarDate,
    to: CalendarDate,
    weeks_span: u8,
) -> Result<Vec<PlannedSheet>, BatchError> {
    DateRange::new(from, to)?;
    let span = if weeks_span == 0 { DEFAULT_WEEKS_SPAN } else { weeks_span };
    let stride = DAYS_PER_WEEK * i32::from(span);

    let mut sheets = Vec::new();
    let mut start = from;
    loop {
        let end = start.checked_add_days(stride - 1).map_or(to, |end| end.min(to));
        let key = WeekKey::for_date(start)?;
        log::debug!(
            "planning weeks {}-{} of year {} ({start}..={end})",
            key.week(),
            u32::from(key.week()) + u32::from(span) - 1,
            key.year()
        );

        sheets.push(PlannedSheet {
            key,
            days: DateRange::new(start, end)?,
            file_name: format!("calendar_{}-{}.pdf", key.year(), key.week()),
        });

        match start.checked_add_days(stride) {
            Some(next) if next <= to => start = next,
            _ => break,
        }
    }

    log::debug!("planned {} sheets from {from} to {to}", sheets.len());
    Ok(sheets)
}
