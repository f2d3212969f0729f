//! # datetimepicker-core
//!
//! Core types, settings, and error types shared by the datetimepicker-rs crates.
//! This crate has no dependency on the other workspace crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Picker settings and global configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`i18n`] - Per-thread active language
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod i18n;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{PickerError, PickerResult};
pub use settings::{PickerSettings, Settings, SETTINGS};
