use serde::{Deserialize, Serialize};

use crate::consts::DAYS_PER_WEEK;
use crate::types::Month;
use crate::week::WeekKey;

/// The months a two-week sheet starting at a given week is titled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthSpan {
    /// Month holding the Monday of the first week
    pub first:  Month,
    /// Month holding the Monday of the second week
    pub second: Month,
}

impl MonthSpan {
    /// Whether the title names a single month.
    pub fn is_single_month(self) -> bool {
        self.first == self.second
    }

    pub const fn as_pair(self) -> (Month, Month) {
        (self.first, self.second)
    }
}

/// Months holding the Mondays of `key` and of the week after it.
pub const fn title_months(key: WeekKey) -> MonthSpan {
    let monday = key.monday();
    MonthSpan {
        first:  monday.month(),
        second: monday.add_days_unchecked(DAYS_PER_WEEK).month(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::key;

    #[test]
    fn test_same_month() {
        // 2025-W02 and W03 start on Jan 6 and Jan 13.
        let span = title_months(key(2025, 2));
        assert_eq!(span.as_pair(), (Month::January, Month::January));
        assert!(span.is_single_month());
    }

    #[test]
    fn test_crossing_month() {
        // 2025-W05 starts Jan 27; the sheet runs to Feb 9.
        let span = title_months(key(2025, 5));
        assert_eq!(span.as_pair(), (Month::January, Month::February));
        assert!(!span.is_single_month());
    }

    #[test]
    fn test_crossing_year() {
        // 2025-W01 starts Dec 30 2024; the next week starts Jan 6 2025.
        assert_eq!(title_months(key(2025, 1)).as_pair(), (Month::December, Month::January));
        // 2024-W52 starts Dec 23; the next week starts Dec 30.
        assert_eq!(title_months(key(2024, 52)).as_pair(), (Month::December, Month::December));
    }

    #[test]
    fn test_months_are_chronological() {
        for week in 1..=52 {
            let span = title_months(key(2025, week));
            if !span.is_single_month() {
                let wrapped = span.first == Month::December && span.second == Month::January;
                assert!(span.first < span.second || wrapped, "week {week}: {span:?}");
            }
        }
    }

    #[test]
    fn test_second_month_follows_key_following() {
        for week in 1..=53 {
            let k = key(2020, week);
            let next = k.following().unwrap();
            assert_eq!(title_months(k).second, next.monday().month());
        }
    }
}
