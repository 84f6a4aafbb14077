use crate::CalendarDate;
use crate::locale::{Locale, LocaleNames};
use crate::span::title_months;
use crate::types::Month;
use crate::week::WeekKey;

/// Characters kept when abbreviating a month or day name
const ABBREVIATION_LEN: usize = 3;

/// Text labels printed on a calendar sheet.
///
/// Names come from `names`; the shape of each label (word order, ordinal
/// suffixes, abbreviations) follows `style`.
#[derive(Clone, Copy)]
pub struct Labels<'a> {
    style: Locale,
    names: &'a dyn LocaleNames,
}

impl<'a> Labels<'a> {
    pub fn new(style: Locale, names: &'a dyn LocaleNames) -> Self {
        Self { style, names }
    }

    pub const fn style(&self) -> Locale {
        self.style
    }

    pub fn names(&self) -> &'a dyn LocaleNames {
        self.names
    }

    /// Month name with a capital first letter
    pub fn month(&self, month: Month) -> String {
        capitalize(self.names.month_name(month))
    }

    /// Lowercase three-letter month abbreviation, e.g. "okt"
    pub fn month_abbreviation(&self, month: Month) -> String {
        abbreviate(self.names.month_name(month)).to_lowercase()
    }

    /// Sheet title: "January 2025", or "January - February 2025" when the
    /// two weeks start in different months.
    pub fn title(&self, key: WeekKey) -> String {
        let span = title_months(key);
        let first = self.month(span.first);
        if span.is_single_month() {
            format!("{first} {}", key.year())
        } else {
            format!("{first} - {} {}", self.month(span.second), key.year())
        }
    }

    /// Left-hand week header, e.g. "Week 5" or "Uke 5"
    pub fn week_header_left(&self, week: u8) -> String {
        match self.style {
            Locale::EnUs => format!("Week {week}"),
            Locale::NbNo => format!("Uke {week}"),
        }
    }

    /// Right-hand week header spanning Monday to Sunday
    pub fn week_header_right(&self, key: WeekKey) -> String {
        format!("{} -> {}", self.date(key.monday()), self.date(key.sunday()))
    }

    /// Short date, e.g. "17th of Oct" or "17. okt"
    pub fn date(&self, date: CalendarDate) -> String {
        let day = date.day();
        match self.style {
            Locale::EnUs => format!(
                "{day}{} of {}",
                ordinal_suffix(day),
                capitalize(&self.month_abbreviation(date.month()))
            ),
            Locale::NbNo => format!("{day}. {}", self.month_abbreviation(date.month())),
        }
    }

    /// Day column header, e.g. "Mon. 24th" or "Mandag 24."
    pub fn day_column(&self, date: CalendarDate) -> String {
        let day = date.day();
        let name = self.names.day_name(date.weekday());
        match self.style {
            Locale::EnUs => format!("{}. {day}{}", abbreviate(name), ordinal_suffix(day)),
            Locale::NbNo => format!("{} {day}.", capitalize(name)),
        }
    }
}

/// Uppercases the first character of `s`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn abbreviate(name: &str) -> &str {
    name.char_indices()
        .nth(ABBREVIATION_LEN)
        .map_or(name, |(end, _)| &name[..end])
}

const fn ordinal_suffix(day: u8) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}
