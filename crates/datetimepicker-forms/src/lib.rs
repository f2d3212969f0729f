//! # datetimepicker-forms
//!
//! The datetime form field type that drives the picker widget. It merges
//! bundle-level and per-field picker options, fills in the language and the
//! default format, and translates the format into whichever vocabulary the
//! other side expects.
//!
//! - [`options`] - [`PickerOptions`] and the [`Formatter`] mode flag
//! - [`datetime_type`] - [`DatetimeType`], its field defaults and view variables

pub mod datetime_type;
pub mod options;

pub use datetime_type::{DatetimeType, FieldDefaults, PickerView, DEFAULT_FORMAT};
pub use options::{Formatter, PickerOptions};
