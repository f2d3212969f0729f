//! # datetimepicker-format
//!
//! Translates date-format strings between two token vocabularies:
//!
//! - **picker** tokens, the syntax of bootstrap-datetimepicker
//!   (`dd/mm/yyyy hh:ii`)
//! - **ICU** tokens, the date-pattern syntax of ICU / `IntlDateFormatter`
//!   (`dd/MM/y HH:mm`)
//!
//! A format string is split into text segments and single-character
//! delimiters. Every text segment found in the mapping is replaced by its
//! counterpart; everything else, delimiters included, is copied verbatim.
//! Translation never fails.
//!
//! ```
//! use datetimepicker_format::{to_icu, to_picker};
//!
//! assert_eq!(to_icu("yyyy-mm-dd"), "y-MM-dd");
//! assert_eq!(to_picker("dd.MM.yyyy HH:mm"), "dd.mm.yyyy hh:ii");
//! ```

pub mod mapping;
pub mod segment;
pub mod translate;
pub mod vocabulary;

pub use mapping::{FormatMapping, ICU_TO_PICKER, PICKER_TO_ICU};
pub use segment::{is_delimiter, FormatString, Segment, Segments};
pub use translate::{to_icu, to_picker, translate, Direction};
pub use vocabulary::{TokenVocabulary, ICU, PICKER};
