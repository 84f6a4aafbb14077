/// First supported calendar year
pub const MIN_YEAR: u16 = 1;

/// Last supported calendar year
pub const MAX_YEAR: u16 = 9999;

/// Maximum year a week key may carry.
/// The last weeks of 9999 (and the week following them) run into year 10000.
pub const MAX_WEEK_YEAR: u16 = 9998;

/// Months per year
pub const MAX_MONTH: u8 = 12;

/// Day numbering within a month starts here
pub const MIN_DAY: u8 = 1;

pub const JANUARY: u8 = 1;
pub const FEBRUARY: u8 = 2;
pub const DECEMBER: u8 = 12;

/// Length of February in a leap year
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Month lengths in a common year, indexed by month number (slot 0 unused)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap rule: every 4th year, except centuries not divisible by 400
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in a week
pub const DAYS_PER_WEEK: i32 = 7;

/// First valid ISO week number
pub const MIN_WEEK: u8 = 1;
/// Last possible ISO week number (only long ISO years have it)
pub const MAX_WEEK: u8 = 53;

/// January 4th always falls in ISO week 1
pub const ISO_WEEK_ONE_DAY: u8 = 4;
/// December 28th always falls in the last ISO week of its year
pub const ISO_LAST_WEEK_DAY: u8 = 28;

/// Weeks printed on one calendar sheet
pub const DEFAULT_WEEKS_SPAN: u8 = 2;

/// People listed on a sheet when none are configured
pub const DEFAULT_NAMES: [&str; 4] = ["Bob", "Alice", "Mallory", "Judy"];

/// Separates year, month and day in `YYYY-MM-DD`
pub const DATE_SEPARATOR: char = '-';
/// Separates the two ends of a `start/end` range
pub const RANGE_SEPARATOR: char = '/';
/// Separator between person names in configuration strings
pub const NAME_SEPARATOR: char = ',';
