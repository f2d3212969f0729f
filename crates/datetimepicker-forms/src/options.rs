//! Picker options and the formatter mode flag.
//!
//! Picker options are a free-form JSON object handed to the widget as-is.
//! Only a few keys mean anything on the server side: `formatter`, `format`,
//! and `language`.

use std::fmt;
use std::str::FromStr;

use datetimepicker_core::{PickerError, PickerResult, PickerSettings};
use datetimepicker_format::Direction;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which vocabulary the configured `format` option is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formatter {
    /// The format uses ICU tokens, the server formatter's syntax.
    /// Spelled `php`, `server`, or `serverFormatter`.
    Server,
    /// The format uses picker tokens, the widget's syntax.
    /// Spelled `js`, `client`, or `clientFormatter`.
    Client,
}

impl Formatter {
    /// The canonical option value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Server => "php",
            Self::Client => "js",
        }
    }

    /// The direction that turns the configured format into the other side's.
    pub const fn direction(self) -> Direction {
        match self {
            Self::Server => Direction::IcuToPicker,
            Self::Client => Direction::PickerToIcu,
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formatter {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "php" | "server" | "serverFormatter" => Ok(Self::Server),
            "js" | "client" | "clientFormatter" => Ok(Self::Client),
            other => Err(PickerError::invalid_option(
                PickerOptions::FORMATTER,
                format!("unknown formatter `{other}`, expected `php` or `js`"),
            )),
        }
    }
}

/// An ordered map of widget options.
///
/// A key holding `null` counts as absent.
///
/// ```
/// use datetimepicker_forms::{Formatter, PickerOptions};
///
/// let mut options = PickerOptions::new();
/// options.insert("formatter", "js");
/// options.insert("autoclose", true);
/// assert_eq!(options.formatter(), Some(Formatter::Client));
/// assert!(options.format().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickerOptions(Map<String, Value>);

impl PickerOptions {
    pub const FORMATTER: &'static str = "formatter";
    pub const FORMAT: &'static str = "format";
    pub const LANGUAGE: &'static str = "language";

    pub fn new() -> Self {
        Self::default()
    }

    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Returns a copy of `self` with every key of `overrides` written over it.
    ///
    /// The merge is shallow: nested objects are replaced, not combined.
    #[must_use]
    pub fn merged(&self, overrides: &Self) -> Self {
        let mut map = self.0.clone();
        for (key, value) in &overrides.0 {
            map.insert(key.clone(), value.clone());
        }
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// Returns the option as a string, if it is one.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns `true` if `key` is present and not `null`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn format(&self) -> Option<&str> {
        self.get_str(Self::FORMAT)
    }

    pub fn language(&self) -> Option<&str> {
        self.get_str(Self::LANGUAGE)
    }

    /// Parses the `formatter` option.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidOption`] if the option is set to
    /// something other than a known formatter name.
    pub fn try_formatter(&self) -> PickerResult<Option<Formatter>> {
        match self.get(Self::FORMATTER) {
            None => Ok(None),
            Some(Value::String(name)) => name.parse().map(Some),
            Some(other) => Err(PickerError::invalid_option(
                Self::FORMATTER,
                format!("expected a string, got {other}"),
            )),
        }
    }

    /// Returns the formatter, or `None` when it is missing or unrecognised.
    pub fn formatter(&self) -> Option<Formatter> {
        self.try_formatter().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring picker formatter");
            None
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for PickerOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl From<&PickerSettings> for PickerOptions {
    fn from(settings: &PickerSettings) -> Self {
        Self::from_map(settings.to_option_map())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PickerOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_aliases() {
        for name in ["php", "server", "serverFormatter"] {
            assert_eq!(name.parse::<Formatter>().unwrap(), Formatter::Server);
        }
        for name in ["js", "client", "clientFormatter"] {
            assert_eq!(name.parse::<Formatter>().unwrap(), Formatter::Client);
        }
        assert!("PHP".parse::<Formatter>().is_err());
    }

    #[test]
    fn test_formatter_direction() {
        assert_eq!(Formatter::Server.direction(), Direction::IcuToPicker);
        assert_eq!(Formatter::Client.direction(), Direction::PickerToIcu);
        assert_eq!(Formatter::Server.to_string(), "php");
    }

    #[test]
    fn test_merged_overrides_win() {
        let base: PickerOptions = [("format", "dd.mm.yyyy"), ("language", "de")]
            .into_iter()
            .collect();
        let overrides: PickerOptions = [("format", "yyyy-mm-dd")].into_iter().collect();

        let merged = base.merged(&overrides);
        assert_eq!(merged.format(), Some("yyyy-mm-dd"));
        assert_eq!(merged.language(), Some("de"));
        // Inputs untouched
        assert_eq!(base.format(), Some("dd.mm.yyyy"));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let mut options = PickerOptions::new();
        options.insert("language", Value::Null);
        assert!(!options.contains("language"));
        assert!(options.language().is_none());
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_try_formatter_errors() {
        let mut options = PickerOptions::new();
        assert!(options.try_formatter().unwrap().is_none());

        options.insert("formatter", "ruby");
        assert!(options.try_formatter().is_err());
        assert!(options.formatter().is_none());

        options.insert("formatter", 3);
        let err = options.try_formatter().unwrap_err();
        assert!(err.to_string().contains("expected a string"));
    }

    #[test]
    fn test_from_picker_settings() {
        let settings = PickerSettings {
            formatter: "php".to_string(),
            language: Some("fr".to_string()),
            ..PickerSettings::default()
        };
        let options = PickerOptions::from(&settings);
        assert_eq!(options.formatter(), Some(Formatter::Server));
        assert_eq!(options.language(), Some("fr"));
        assert!(options.format().is_none());
    }

    #[test]
    fn test_serializes_transparently() {
        let options: PickerOptions = [("todayBtn", true)].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&options).unwrap(),
            r#"{"todayBtn":true}"#
        );
    }
}
