use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DAYS_PER_WEEK, DECEMBER, ISO_LAST_WEEK_DAY, ISO_WEEK_ONE_DAY, JANUARY, MAX_WEEK, MAX_WEEK_YEAR,
    MIN_DAY, MIN_WEEK, MIN_YEAR,
};
use crate::range::Days;
use crate::types::Year;
use crate::{CalendarDate, DateError, civil_from_days, days_from_civil, week_number_for_date};

/// Error type for week key validation.
///
/// Out-of-range input is reported with the offending value, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    /// Week number outside `1..=53`.
    #[error("Invalid week: {0} (must be {min}-{max})", min = MIN_WEEK, max = MAX_WEEK)]
    InvalidWeek(i32),

    /// Year outside the range whose weeks stay inside the supported dates.
    #[error("Invalid week year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_WEEK_YEAR)]
    InvalidYear(i32),

    /// Error reading or building a date.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// A (year, week) pair identifying one printed calendar week.
///
/// `year` is the label printed on the page, which is not necessarily the
/// ISO 8601 week-numbering year of every day in the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWeekKey", into = "RawWeekKey")]
pub struct WeekKey {
    year: Year,
    week: u8,
}

#[derive(Serialize, Deserialize)]
struct RawWeekKey {
    year: i32,
    week: i32,
}

impl WeekKey {
    /// Creates a validated week key.
    ///
    /// Week 53 is accepted for every year; whether the year actually has a
    /// 53rd ISO week is for the caller to check with [`weeks_in_year`].
    ///
    /// # Errors
    /// Returns `WeekError::InvalidWeek` for weeks outside `1..=53` and
    /// `WeekError::InvalidYear` for years outside `1..=MAX_WEEK_YEAR`.
    pub fn new(year: i32, week: i32) -> Result<Self, WeekError> {
        if !(i32::from(MIN_WEEK)..=i32::from(MAX_WEEK)).contains(&week) {
            return Err(WeekError::InvalidWeek(week));
        }
        let year = u16::try_from(year)
            .ok()
            .filter(|y| *y <= MAX_WEEK_YEAR)
            .ok_or(WeekError::InvalidYear(year))
            .and_then(|y| Year::new(y).map_err(|_| WeekError::InvalidYear(year)))?;
        let week = u8::try_from(week).map_err(|_| WeekError::InvalidWeek(week))?;
        Ok(Self { year, week })
    }

    /// The week a date is printed under: the date's own year together with
    /// the week number from [`week_number_for_date`].
    ///
    /// # Errors
    /// Returns `WeekError::InvalidYear` for dates in the last supported year.
    pub fn for_date(date: CalendarDate) -> Result<Self, WeekError> {
        Self::new(i32::from(date.year()), i32::from(week_number_for_date(date)))
    }

    /// The week of today's local date.
    ///
    /// # Errors
    /// Returns `WeekError::Date` if the system clock is outside the supported
    /// range.
    pub fn current() -> Result<Self, WeekError> {
        Self::for_date(CalendarDate::today()?)
    }

    pub const fn year(self) -> u16 {
        self.year.get()
    }

    pub const fn week(self) -> u8 {
        self.week
    }

    /// Monday of this week.
    ///
    /// Week 1 is the week holding January 4th; later weeks follow at a fixed
    /// seven-day stride.
    pub const fn monday(self) -> CalendarDate {
        let jan4 = CalendarDate::from_day_number_unchecked(days_from_civil(
            self.year.get() as i32,
            JANUARY,
            ISO_WEEK_ONE_DAY,
        ));
        let week_one = jan4.add_days_unchecked(-(jan4.weekday().days_from_monday() as i32));
        week_one.add_days_unchecked((self.week as i32 - 1) * DAYS_PER_WEEK)
    }

    /// Sunday of this week, six days after [`WeekKey::monday`].
    pub const fn sunday(self) -> CalendarDate {
        self.monday().add_days_unchecked(DAYS_PER_WEEK - 1)
    }

    /// The seven days of this week, Monday first.
    pub const fn days(self) -> Days {
        self.monday().days_through(self.sunday())
    }

    pub fn contains(self, date: CalendarDate) -> bool {
        (self.monday()..=self.sunday()).contains(&date)
    }

    /// The week after this one. Past the last ISO week of the year the key
    /// rolls into the next year, so the following Monday is always seven days
    /// later.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidYear` when rolling past `MAX_WEEK_YEAR`.
    pub fn following(self) -> Result<Self, WeekError> {
        let next = self.week + 1;
        let in_year = weeks_in_year(self.year());
        if next > in_year {
            Self::new(i32::from(self.year()) + 1, i32::from(next - in_year))
        } else {
            Self::new(i32::from(self.year()), i32::from(next))
        }
    }

    /// Number of the month holding this week's Monday.
    pub const fn month_number(self) -> u8 {
        self.monday().month().number()
    }

    /// Default file name for a single rendered sheet.
    pub fn output_file_name(self) -> String {
        format!("calendar_w{}_{}.pdf", self.week, self.year)
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year.get(), self.week)
    }
}

impl TryFrom<RawWeekKey> for WeekKey {
    type Error = WeekError;

    fn try_from(raw: RawWeekKey) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.week)
    }
}

impl From<WeekKey> for RawWeekKey {
    fn from(key: WeekKey) -> Self {
        Self {
            year: i32::from(key.year()),
            week: i32::from(key.week),
        }
    }
}

/// Monday of `week` in `year`.
///
/// # Errors
/// Same as [`WeekKey::new`].
pub fn monday_of(year: i32, week: i32) -> Result<CalendarDate, WeekError> {
    WeekKey::new(year, week).map(WeekKey::monday)
}

/// Sunday of `week` in `year`.
///
/// # Errors
/// Same as [`WeekKey::new`].
pub fn sunday_of(year: i32, week: i32) -> Result<CalendarDate, WeekError> {
    WeekKey::new(year, week).map(WeekKey::sunday)
}

/// The ISO 8601 week-numbering year and week of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsoWeek {
    pub year: u16,
    pub week: u8,
}

impl IsoWeek {
    pub const fn of(date: CalendarDate) -> Self {
        let (year, week) = iso_week_of_day_number(date.day_number());
        Self {
            year: year as u16,
            week,
        }
    }
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

/// Number of ISO weeks in `year`, 52 or 53.
pub const fn weeks_in_year(year: u16) -> u8 {
    iso_week_of_day_number(days_from_civil(year as i32, DECEMBER, ISO_LAST_WEEK_DAY)).1
}

/// The year of today's local date.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the system clock is outside the
/// supported range.
pub fn current_year() -> Result<u16, DateError> {
    CalendarDate::today().map(CalendarDate::year)
}

/// A week belongs to the year holding its Thursday, and is numbered by how
/// many Thursdays of that year precede it.
const fn iso_week_of_day_number(days: i32) -> (i32, u8) {
    let from_monday = (days + 3).rem_euclid(7);
    let thursday = days - from_monday + 3;
    let (year, _, _) = civil_from_days(thursday);
    let jan1 = days_from_civil(year, JANUARY, MIN_DAY);
    (year, ((thursday - jan1) / DAYS_PER_WEEK + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, key};
    use crate::types::Weekday;

    #[test]
    fn test_new_valid() {
        let k = key(2025, 1);
        assert_eq!(k.year(), 2025);
        assert_eq!(k.week(), 1);
        assert!(WeekKey::new(2020, 53).is_ok());
        assert!(WeekKey::new(1, 1).is_ok());
        assert!(WeekKey::new(9998, 53).is_ok());
    }

    #[test]
    fn test_new_rejects_without_clamping() {
        assert_eq!(WeekKey::new(2025, 0), Err(WeekError::InvalidWeek(0)));
        assert_eq!(WeekKey::new(2025, 54), Err(WeekError::InvalidWeek(54)));
        assert_eq!(WeekKey::new(2025, -1), Err(WeekError::InvalidWeek(-1)));
        assert_eq!(WeekKey::new(0, 1), Err(WeekError::InvalidYear(0)));
        assert_eq!(WeekKey::new(-5, 1), Err(WeekError::InvalidYear(-5)));
        assert_eq!(WeekKey::new(9999, 1), Err(WeekError::InvalidYear(9999)));
        assert_eq!(WeekKey::new(70_000, 1), Err(WeekError::InvalidYear(70_000)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(WeekError::InvalidWeek(0).to_string(), "Invalid week: 0 (must be 1-53)");
        assert_eq!(
            WeekError::InvalidYear(9999).to_string(),
            "Invalid week year: 9999 (must be 1-9998)"
        );
    }

    #[test]
    fn test_monday_boundaries() {
        struct TestCase {
            year:     i32,
            week:     i32,
            expected: CalendarDate,
        }

        let cases = [
            TestCase { year: 2025, week: 1, expected: date(2024, 12, 30) },
            TestCase { year: 2025, week: 2, expected: date(2025, 1, 6) },
            TestCase { year: 2024, week: 52, expected: date(2024, 12, 23) },
            TestCase { year: 2024, week: 1, expected: date(2024, 1, 1) },
            TestCase { year: 2021, week: 1, expected: date(2021, 1, 4) },
            TestCase { year: 2020, week: 53, expected: date(2020, 12, 28) },
            TestCase { year: 2026, week: 1, expected: date(2025, 12, 29) },
            TestCase { year: 1, week: 1, expected: date(1, 1, 1) },
        ];

        for case in &cases {
            assert_eq!(
                monday_of(case.year, case.week).unwrap(),
                case.expected,
                "monday of {}-W{}",
                case.year,
                case.week
            );
        }
    }

    #[test]
    fn test_sunday_boundaries() {
        assert_eq!(sunday_of(2024, 52).unwrap(), date(2024, 12, 29));
        assert_eq!(sunday_of(2025, 1).unwrap(), date(2025, 1, 5));
        assert_eq!(sunday_of(2025, 2).unwrap(), date(2025, 1, 12));
        assert!(sunday_of(2025, 0).is_err());
    }

    #[test]
    fn test_monday_is_monday_and_sunday_is_sunday() {
        for year in [1999, 2000, 2015, 2020, 2024, 2025, 2026, 2100] {
            for week in 1..=53 {
                let k = key(year, week);
                assert_eq!(k.monday().weekday(), Weekday::Monday);
                assert_eq!(k.sunday().weekday(), Weekday::Sunday);
                assert_eq!(k.monday().days_until(k.sunday()), 6);
            }
        }
    }

    #[test]
    fn test_nonexistent_week_53_is_next_years_week_1() {
        // 2025 has 52 ISO weeks, so its "week 53" is the week of 2026-W01.
        assert_eq!(key(2025, 53).monday(), key(2026, 1).monday());
    }

    #[test]
    fn test_days_of_week() {
        let days: Vec<CalendarDate> = key(2025, 1).days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2024, 12, 30));
        assert_eq!(days[6], date(2025, 1, 5));
    }

    #[test]
    fn test_contains() {
        let k = key(2025, 1);
        assert!(k.contains(date(2024, 12, 30)));
        assert!(k.contains(date(2025, 1, 5)));
        assert!(!k.contains(date(2024, 12, 29)));
        assert!(!k.contains(date(2025, 1, 6)));
    }

    #[test]
    fn test_iso_week_of_date() {
        struct TestCase {
            date:     CalendarDate,
            expected: IsoWeek,
        }

        let cases = [
            TestCase { date: date(2024, 12, 29), expected: IsoWeek { year: 2024, week: 52 } },
            TestCase { date: date(2024, 12, 30), expected: IsoWeek { year: 2025, week: 1 } },
            TestCase { date: date(2021, 1, 1), expected: IsoWeek { year: 2020, week: 53 } },
            TestCase { date: date(2021, 1, 3), expected: IsoWeek { year: 2020, week: 53 } },
            TestCase { date: date(2021, 1, 4), expected: IsoWeek { year: 2021, week: 1 } },
            TestCase { date: date(2026, 1, 1), expected: IsoWeek { year: 2026, week: 1 } },
            TestCase { date: date(2025, 6, 15), expected: IsoWeek { year: 2025, week: 24 } },
            TestCase { date: CalendarDate::MAX, expected: IsoWeek { year: 9999, week: 52 } },
        ];

        for case in &cases {
            assert_eq!(case.date.iso_week(), case.expected, "iso week of {}", case.date);
        }
    }

    #[test]
    fn test_weeks_in_year() {
        for year in [2015, 2020, 2026, 2032, 9998] {
            assert_eq!(weeks_in_year(year), 53, "{year} is a long year");
        }
        for year in [2019, 2021, 2024, 2025, 9999] {
            assert_eq!(weeks_in_year(year), 52, "{year} is a short year");
        }
    }

    #[test]
    fn test_following() {
        assert_eq!(key(2025, 1).following().unwrap(), key(2025, 2));
        assert_eq!(key(2024, 52).following().unwrap(), key(2025, 1));
        assert_eq!(key(2020, 52).following().unwrap(), key(2020, 53));
        assert_eq!(key(2020, 53).following().unwrap(), key(2021, 1));
        // A week 53 the year does not have is followed by next year's week 2.
        assert_eq!(key(2025, 53).following().unwrap(), key(2026, 2));
        assert_eq!(key(9998, 53).following(), Err(WeekError::InvalidYear(9999)));
    }

    #[test]
    fn test_following_monday_is_seven_days_later() {
        for year in [2015, 2020, 2024, 2025] {
            for week in 1..=53 {
                let k = key(year, week);
                let next = k.following().unwrap();
                assert_eq!(k.monday().days_until(next.monday()), 7, "after {k}");
            }
        }
    }

    #[test]
    fn test_for_date_uses_calendar_year() {
        assert_eq!(WeekKey::for_date(date(2024, 12, 30)).unwrap(), key(2024, 1));
        assert_eq!(WeekKey::for_date(date(2021, 1, 1)).unwrap(), key(2021, 1));
        assert_eq!(WeekKey::for_date(date(2025, 3, 12)).unwrap(), key(2025, 11));
        assert_eq!(
            WeekKey::for_date(date(9999, 6, 1)),
            Err(WeekError::InvalidYear(9999))
        );
    }

    #[test]
    fn test_current_week_is_valid() {
        let k = WeekKey::current().unwrap();
        assert_eq!(i32::from(k.year()), i32::from(current_year().unwrap()));
        assert!((1..=53).contains(&k.week()));
    }

    #[test]
    fn test_month_number() {
        assert_eq!(key(2025, 1).month_number(), 12);
        assert_eq!(key(2025, 2).month_number(), 1);
        assert_eq!(key(2025, 5).month_number(), 1);
        assert_eq!(key(2025, 6).month_number(), 2);
    }

    #[test]
    fn test_display_and_file_name() {
        assert_eq!(key(2025, 3).to_string(), "2025-W03");
        assert_eq!(date(2024, 12, 30).iso_week().to_string(), "2025-W01");
        assert_eq!(key(2025, 3).output_file_name(), "calendar_w3_2025.pdf");
    }

    #[test]
    fn test_serde() {
        let k = key(2025, 7);
        let json = serde_json::to_string(&k).unwrap();
        assert_eq!(json, r#"{"year":2025,"week":7}"#);
        let parsed: WeekKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, k);
        assert!(serde_json::from_str::<WeekKey>(r#"{"year":2025,"week":0}"#).is_err());
        assert!(serde_json::from_str::<WeekKey>(r#"{"year":2025,"week":54}"#).is_err());
    }
}
