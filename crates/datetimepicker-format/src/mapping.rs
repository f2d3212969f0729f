//! Token-to-token mappings derived from pairs of vocabularies.

use std::collections::HashMap;

use datetimepicker_core::{PickerError, PickerResult};
use once_cell::sync::Lazy;

use crate::vocabulary::{TokenVocabulary, ICU, PICKER};

/// Maps picker tokens to ICU tokens.
///
/// Picker `yyyy` appears twice; the first row wins, so it becomes ICU `y`.
pub static PICKER_TO_ICU: Lazy<FormatMapping> = Lazy::new(|| FormatMapping::pair(&PICKER, &ICU));

/// Maps ICU tokens to picker tokens.
///
/// ICU `a` appears twice; the first row wins, so it becomes picker `p`.
pub static ICU_TO_PICKER: Lazy<FormatMapping> = Lazy::new(|| FormatMapping::pair(&ICU, &PICKER));

/// An immutable lookup table from source tokens to target tokens.
///
/// # Examples
///
/// ```
/// use datetimepicker_format::{FormatMapping, TokenVocabulary};
///
/// let from = TokenVocabulary::new("short", &["d", "m"]);
/// let to = TokenVocabulary::new("long", &["day", "month"]);
/// let mapping = FormatMapping::new(&from, &to).unwrap();
/// assert_eq!(mapping.get("m"), Some("month"));
/// assert_eq!(mapping.get("y"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatMapping {
    entries: HashMap<String, String>,
}

impl FormatMapping {
    /// Pairs two vocabularies position by position.
    ///
    /// When `from` repeats a token, the earliest position wins.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidVocabulary`] if the vocabularies differ in
    /// length or either holds an empty token or a token containing a delimiter.
    pub fn new(from: &TokenVocabulary<'_>, to: &TokenVocabulary<'_>) -> PickerResult<Self> {
        if from.len() != to.len() {
            return Err(PickerError::InvalidVocabulary(format!(
                "cannot pair {} ({} tokens) with {} ({} tokens)",
                from.name(),
                from.len(),
                to.name(),
                to.len()
            )));
        }
        from.validate()?;
        to.validate()?;
        Ok(Self::pair(from, to))
    }

    /// Maps every token of `vocabulary` to itself.
    pub fn identity(vocabulary: &TokenVocabulary<'_>) -> Self {
        Self::pair(vocabulary, vocabulary)
    }

    /// Pairs vocabularies already known to be well formed.
    fn pair(from: &TokenVocabulary<'_>, to: &TokenVocabulary<'_>) -> Self {
        let mut entries = HashMap::with_capacity(from.len());
        for (source, target) in from.tokens().iter().zip(to.tokens()) {
            entries
                .entry((*source).to_string())
                .or_insert_with(|| (*target).to_string());
        }
        tracing::debug!(
            from = from.name(),
            to = to.name(),
            tokens = entries.len(),
            "built format mapping"
        );
        Self { entries }
    }

    /// Looks up the counterpart of `token`.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Number of distinct source tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(source, target)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_to_icu_first_row_wins() {
        assert_eq!(PICKER_TO_ICU.get("yyyy"), Some("y"));
        // 19 rows, one duplicate source token
        assert_eq!(PICKER_TO_ICU.len(), 18);
    }

    #[test]
    fn test_icu_to_picker_first_row_wins() {
        assert_eq!(ICU_TO_PICKER.get("a"), Some("p"));
        assert_eq!(ICU_TO_PICKER.get("y"), Some("yyyy"));
        assert_eq!(ICU_TO_PICKER.get("yyyy"), Some("yyyy"));
        assert_eq!(ICU_TO_PICKER.len(), 18);
    }

    #[test]
    fn test_hour_rows_swap_case() {
        assert_eq!(PICKER_TO_ICU.get("hh"), Some("HH"));
        assert_eq!(PICKER_TO_ICU.get("HH"), Some("hh"));
        assert_eq!(ICU_TO_PICKER.get("HH"), Some("hh"));
        assert_eq!(ICU_TO_PICKER.get("h"), Some("H"));
    }

    #[test]
    fn test_minutes_and_months() {
        assert_eq!(PICKER_TO_ICU.get("ii"), Some("mm"));
        assert_eq!(PICKER_TO_ICU.get("mm"), Some("MM"));
        assert_eq!(PICKER_TO_ICU.get("MM"), Some("MMMM"));
        assert_eq!(PICKER_TO_ICU.get("M"), Some("MMM"));
        assert_eq!(ICU_TO_PICKER.get("mm"), Some("ii"));
        assert_eq!(ICU_TO_PICKER.get("MMM"), Some("M"));
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let from = TokenVocabulary::new("a", &["d", "m"]);
        let to = TokenVocabulary::new("b", &["d"]);
        let err = FormatMapping::new(&from, &to).unwrap_err();
        assert!(matches!(err, PickerError::InvalidVocabulary(_)));
        assert!(err.to_string().contains("2 tokens"));
    }

    #[test]
    fn test_new_rejects_delimiter_in_target() {
        let from = TokenVocabulary::new("a", &["d"]);
        let to = TokenVocabulary::new("b", &["d.d"]);
        assert!(FormatMapping::new(&from, &to).is_err());
    }

    #[test]
    fn test_new_matches_builtin() {
        let mapping = FormatMapping::new(&PICKER, &ICU).unwrap();
        assert_eq!(mapping, *PICKER_TO_ICU);
    }

    #[test]
    fn test_identity() {
        let identity = FormatMapping::identity(&ICU);
        assert!(identity.iter().all(|(k, v)| k == v));
        assert!(identity.contains("MMMM"));
        assert!(!identity.is_empty());
    }
}
