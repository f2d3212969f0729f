//! Format-string translation.

use std::fmt;

use crate::mapping::{FormatMapping, ICU_TO_PICKER, PICKER_TO_ICU};
use crate::segment::{FormatString, Segment};

/// Which way a format string is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Picker tokens in, ICU tokens out.
    PickerToIcu,
    /// ICU tokens in, picker tokens out.
    IcuToPicker,
}

impl Direction {
    /// The built-in mapping for this direction.
    pub fn mapping(self) -> &'static FormatMapping {
        match self {
            Self::PickerToIcu => &*PICKER_TO_ICU,
            Self::IcuToPicker => &*ICU_TO_PICKER,
        }
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::PickerToIcu => Self::IcuToPicker,
            Self::IcuToPicker => Self::PickerToIcu,
        }
    }

    /// Translates `format` in this direction.
    pub fn translate(self, format: &str) -> String {
        translate(format, self.mapping())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PickerToIcu => f.write_str("picker->icu"),
            Self::IcuToPicker => f.write_str("icu->picker"),
        }
    }
}

/// Translates `format` token by token through `mapping`.
///
/// Text segments found in `mapping` are replaced; unknown text and every
/// delimiter are copied unchanged, in their original positions. Never fails.
///
/// ```
/// use datetimepicker_format::{translate, PICKER_TO_ICU};
///
/// assert_eq!(translate("dd.mm.yyyy", &PICKER_TO_ICU), "dd.MM.y");
/// assert_eq!(translate("unknowntoken", &PICKER_TO_ICU), "unknowntoken");
/// assert_eq!(translate("", &PICKER_TO_ICU), "");
/// ```
pub fn translate(format: &str, mapping: &FormatMapping) -> String {
    let mut translated = String::with_capacity(format.len() + 8);
    for segment in FormatString::new(format).segments() {
        match segment {
            Segment::Text(text) => translated.push_str(mapping.get(text).unwrap_or(text)),
            Segment::Delimiter(c) => translated.push(c),
        }
    }
    tracing::trace!(input = format, output = %translated, "translated date format");
    translated
}

/// Translates a picker format into an ICU pattern.
pub fn to_icu(format: &str) -> String {
    Direction::PickerToIcu.translate(format)
}

/// Translates an ICU pattern into a picker format.
pub fn to_picker(format: &str) -> String {
    Direction::IcuToPicker.translate(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{ICU, PICKER};

    #[test]
    fn test_empty() {
        assert_eq!(to_icu(""), "");
        assert_eq!(to_picker(""), "");
    }

    #[test]
    fn test_unknown_token_passes_through() {
        assert_eq!(to_icu("unknowntoken"), "unknowntoken");
        assert_eq!(to_picker("at noon"), "at noon");
    }

    #[test]
    fn test_default_format_to_icu() {
        assert_eq!(to_icu("mm/dd/yyyy HH:ii"), "MM/dd/y hh:mm");
    }

    #[test]
    fn test_hyphenated_date_to_icu() {
        assert_eq!(to_icu("yyyy-mm-dd"), "y-MM-dd");
    }

    #[test]
    fn test_icu_to_picker() {
        assert_eq!(to_picker("dd/MM/y HH:mm:ss"), "dd/mm/yyyy hh:ii:ss");
        assert_eq!(to_picker("d MMMM yyyy, h:mm a"), "d MM yyyy, H:ii p");
    }

    #[test]
    fn test_positional_rebuild_does_not_touch_unmatched_text() {
        // "mm" inside "mmx" is not a segment of its own.
        assert_eq!(to_icu("mmx/mm"), "mmx/MM");
        // The same token twice is translated twice.
        assert_eq!(to_icu("d-d"), "d-d");
        assert_eq!(to_icu("M M"), "MMM MMM");
    }

    #[test]
    fn test_consecutive_delimiters_preserved() {
        assert_eq!(to_icu("dd//mm  ii"), "dd//MM  mm");
        assert_eq!(to_icu(" -ii- "), " -mm- ");
    }

    #[test]
    fn test_each_unambiguous_picker_token_round_trips() {
        for token in PICKER.tokens() {
            if *token == "P" {
                continue;
            }
            assert_eq!(to_picker(&to_icu(token)), *token, "{token}");
        }
    }

    #[test]
    fn test_ambiguous_meridian_collapses() {
        assert_eq!(to_icu("P"), "a");
        assert_eq!(to_icu("p"), "a");
        assert_eq!(to_picker("a"), "p");
    }

    #[test]
    fn test_identity_mapping_is_noop() {
        let identity = FormatMapping::identity(&ICU);
        let format = "EEEE, d MMMM y 'at' HH:mm";
        assert_eq!(translate(format, &identity), format);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::PickerToIcu.reverse(), Direction::IcuToPicker);
        assert_eq!(Direction::IcuToPicker.translate("MMMM"), "MM");
        assert_eq!(Direction::PickerToIcu.to_string(), "picker->icu");
    }
}
