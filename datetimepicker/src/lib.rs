//! # datetimepicker
//!
//! Integration between a web form layer and the bootstrap datetime picker.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on it to
//! get everything, or on individual crates for finer-grained control.

/// Errors, settings, logging, and the active language.
pub use datetimepicker_core as core;

/// Translation between picker and ICU date-format tokens.
pub use datetimepicker_format as format;

/// The datetime field type and its picker options.
#[cfg(feature = "forms")]
pub use datetimepicker_forms as forms;

/// Management commands.
#[cfg(feature = "cli")]
pub use datetimepicker_cli as cli;

pub use datetimepicker_core::{PickerError, PickerResult, Settings};
pub use datetimepicker_format::{to_icu, to_picker, translate, Direction, FormatMapping};

