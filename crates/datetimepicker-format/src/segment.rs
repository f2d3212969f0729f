//! Splitting format strings into text segments and delimiters.

use std::fmt;

/// Returns `true` for characters that separate tokens in a format string.
///
/// The set is: `\ / . : _ ; , -` plus ASCII whitespace (space, tab, line
/// feed, vertical tab, form feed, carriage return).
pub const fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        '\\' | '/' | '.' | ':' | '_' | ';' | ',' | '-' | ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}'
            | '\r'
    )
}

/// One piece of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text between delimiters. Empty between consecutive delimiters and at
    /// either end when the string starts or ends with a delimiter.
    Text(&'a str),
    /// A single delimiter character.
    Delimiter(char),
}

/// A borrowed format string, viewed as a sequence of [`Segment`]s.
///
/// Segments alternate text and delimiter, starting and ending with text, so
/// a string with `n` delimiters has `n + 1` text segments.
///
/// ```
/// use datetimepicker_format::{FormatString, Segment};
///
/// let format = FormatString::new("HH:ii");
/// let segments: Vec<_> = format.segments().collect();
/// assert_eq!(
///     segments,
///     [Segment::Text("HH"), Segment::Delimiter(':'), Segment::Text("ii")]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatString<'a> {
    source: &'a str,
}

impl<'a> FormatString<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Iterates over all segments in order.
    pub fn segments(&self) -> Segments<'a> {
        Segments {
            rest: self.source,
            pending: None,
            finished: false,
        }
    }

    /// Iterates over the non-empty text segments.
    pub fn tokens(&self) -> impl Iterator<Item = &'a str> {
        self.segments().filter_map(|segment| match segment {
            Segment::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        })
    }
}

impl fmt::Display for FormatString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}

/// Iterator returned by [`FormatString::segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    pending: Option<char>,
    finished: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(c) = self.pending.take() {
            return Some(Segment::Delimiter(c));
        }
        if self.finished {
            return None;
        }
        if let Some((index, c)) = self.rest.char_indices().find(|(_, c)| is_delimiter(*c)) {
            let text = &self.rest[..index];
            self.rest = &self.rest[index + c.len_utf8()..];
            self.pending = Some(c);
            Some(Segment::Text(text))
        } else {
            self.finished = true;
            Some(Segment::Text(self.rest))
        }
    }
}
