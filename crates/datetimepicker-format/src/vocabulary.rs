//! Token vocabularies of the two format systems.
//!
//! The two tables are paired by position: `PICKER_TOKENS[i]` and
//! `ICU_TOKENS[i]` name the same date/time component. Two rows collapse in
//! one direction each:
//!
//! - rows 0 and 1 both hold picker `yyyy` (ICU `y` and `yyyy`)
//! - rows 10 and 11 both hold ICU `a` (picker `p` and `P`)

use datetimepicker_core::{PickerError, PickerResult};

use crate::segment::is_delimiter;

/// Picker (bootstrap-datetimepicker) tokens.
pub const PICKER_TOKENS: [&str; 19] = [
    "yyyy", "yyyy", "ss", "ii", "hh", "HH", "dd", "mm", "MM", "yy", "p", "P", "s", "i", "h", "H",
    "d", "m", "M",
];

/// ICU date-pattern tokens.
pub const ICU_TOKENS: [&str; 19] = [
    "y", "yyyy", "ss", "mm", "HH", "hh", "dd", "MM", "MMMM", "yy", "a", "a", "s", "m", "H", "h",
    "d", "M", "MMM",
];

/// The picker vocabulary.
pub const PICKER: TokenVocabulary<'static> = TokenVocabulary::new("picker", &PICKER_TOKENS);

/// The ICU vocabulary.
pub const ICU: TokenVocabulary<'static> = TokenVocabulary::new("icu", &ICU_TOKENS);

/// An ordered, named list of format tokens.
///
/// Order only matters for pairing with another vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenVocabulary<'a> {
    name: &'a str,
    tokens: &'a [&'a str],
}

impl<'a> TokenVocabulary<'a> {
    /// Creates a vocabulary. Call [`validate`](Self::validate) for tokens
    /// that do not come from a trusted table.
    pub const fn new(name: &'a str, tokens: &'a [&'a str]) -> Self {
        Self { name, tokens }
    }

    /// The vocabulary's name, used in diagnostics.
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// The tokens in positional order.
    pub const fn tokens(&self) -> &'a [&'a str] {
        self.tokens
    }

    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` if `token` appears anywhere in the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&token)
    }

    /// Returns the first position of `token`.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| *t == token)
    }

    /// Checks that every token is non-empty and free of delimiter characters.
    ///
    /// A token holding a delimiter could never match a segment.
    pub fn validate(&self) -> PickerResult<()> {
        for (index, token) in self.tokens.iter().enumerate() {
            if token.is_empty() {
                return Err(PickerError::InvalidVocabulary(format!(
                    "{} token at position {index} is empty",
                    self.name
                )));
            }
            if let Some(c) = token.chars().find(|c| is_delimiter(*c)) {
                return Err(PickerError::InvalidVocabulary(format!(
                    "{} token {token:?} at position {index} contains delimiter {c:?}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}
