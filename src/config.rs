use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_NAMES, NAME_SEPARATOR};
use crate::locale::{Calendar, Locale};

/// Environment key selecting the locale, e.g. `nb_NO`
pub const LOCALE_VAR: &str = "CALENDAR_LOCALE";
/// Environment key selecting the paper size, `A4` or `letter`
pub const PAPER_SIZE_VAR: &str = "PAPERSIZE";
/// Environment key listing person names, comma separated
pub const NAMES_VAR: &str = "CALENDAR_NAMES";
/// Environment key toggling the corner drawing
pub const DRAWING_VAR: &str = "CALENDAR_DRAWING";

/// Error type for configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown locale: {0} (expected one of en_US, nb_NO)")]
    UnknownLocale(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Paper the sheets are printed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

impl FromStr for PaperSize {
    type Err = std::convert::Infallible;

    /// "letter" in any case selects Letter; anything else is A4.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("letter") {
            Ok(Self::Letter)
        } else {
            Ok(Self::A4)
        }
    }
}

/// Settings for producing calendar sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub locale:     Locale,
    pub paper_size: PaperSize,
    pub names:      Vec<String>,
    pub drawing:    bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            locale:     Locale::default(),
            paper_size: PaperSize::default(),
            names:      DEFAULT_NAMES.iter().map(|&n| n.to_owned()).collect(),
            drawing:    true,
        }
    }
}

impl CalendarConfig {
    /// Reads settings from the process environment, keeping defaults for
    /// unset keys.
    ///
    /// # Errors
    /// See [`CalendarConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, keeping defaults for keys it does not
    /// know.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownLocale` for an unsupported locale and
    /// `ConfigError::InvalidValue` for a drawing flag that is not a boolean
    /// or a names list without any name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(locale) = lookup(LOCALE_VAR) {
            config.locale = locale.parse()?;
        }
        if let Some(paper) = lookup(PAPER_SIZE_VAR) {
            config.paper_size = paper.parse().unwrap_or_default();
        }
        if let Some(names) = lookup(NAMES_VAR) {
            config.names = parse_names(&names);
            if config.names.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key:   NAMES_VAR,
                    value: names,
                });
            }
        }
        if let Some(drawing) = lookup(DRAWING_VAR) {
            config.drawing = parse_flag(&drawing).ok_or(ConfigError::InvalidValue {
                key:   DRAWING_VAR,
                value: drawing,
            })?;
        }

        log::debug!(
            "calendar config: locale {}, paper {:?}, {} names, drawing {}",
            config.locale,
            config.paper_size,
            config.names.len(),
            config.drawing
        );
        Ok(config)
    }

    /// The calendar for the configured locale, without holidays.
    pub const fn calendar(&self) -> Calendar {
        Calendar::new(self.locale)
    }
}

/// Splits a comma separated list of names, dropping blanks.
pub fn parse_names(list: &str) -> Vec<String> {
    list.split(NAME_SEPARATOR)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.paper_size, PaperSize::A4);
        assert_eq!(config.names, ["Bob", "Alice", "Mallory", "Judy"]);
        assert!(config.drawing);
    }

    #[test]
    fn test_from_empty_lookup_is_default() {
        let config = CalendarConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn test_from_lookup() {
        let config = CalendarConfig::from_lookup(lookup_from(&[
            (LOCALE_VAR, "nb_NO"),
            (PAPER_SIZE_VAR, " Letter "),
            (NAMES_VAR, "Kari, Ola,,"),
            (DRAWING_VAR, "off"),
        ]))
        .unwrap();

        assert_eq!(config.locale, Locale::NbNo);
        assert_eq!(config.paper_size, PaperSize::Letter);
        assert_eq!(config.names, ["Kari", "Ola"]);
        assert!(!config.drawing);
        assert_eq!(config.calendar().locale(), Locale::NbNo);
    }

    #[test]
    fn test_from_lookup_errors() {
        assert_eq!(
            CalendarConfig::from_lookup(lookup_from(&[(LOCALE_VAR, "sv_SE")])),
            Err(ConfigError::UnknownLocale("sv_SE".to_owned()))
        );
        assert_eq!(
            CalendarConfig::from_lookup(lookup_from(&[(DRAWING_VAR, "maybe")])),
            Err(ConfigError::InvalidValue {
                key:   DRAWING_VAR,
                value: "maybe".to_owned(),
            })
        );
        assert!(matches!(
            CalendarConfig::from_lookup(lookup_from(&[(NAMES_VAR, " , ")])),
            Err(ConfigError::InvalidValue { key: NAMES_VAR, .. })
        ));
    }

    #[test]
    fn test_paper_size_fallback() {
        assert_eq!("letter".parse::<PaperSize>().unwrap(), PaperSize::Letter);
        assert_eq!("A4".parse::<PaperSize>().unwrap(), PaperSize::A4);
        assert_eq!("A3".parse::<PaperSize>().unwrap(), PaperSize::A4);
    }

    #[test]
    fn test_serde_with_defaults() {
        let config: CalendarConfig = serde_json::from_str(r#"{"locale": "nb_NO"}"#).unwrap();
        assert_eq!(config.locale, Locale::NbNo);
        assert_eq!(config.names.len(), 4);
        assert!(config.drawing);

        let json = serde_json::to_string(&CalendarConfig::default()).unwrap();
        let parsed: CalendarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, CalendarConfig::default());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(parse_names("Bob,Alice"), ["Bob", "Alice"]);
        assert!(parse_names("").is_empty());
    }
}
