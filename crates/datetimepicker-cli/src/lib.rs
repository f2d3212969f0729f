//! # datetimepicker-cli
//!
//! Management commands for datetimepicker-rs.
//!
//! - `translate` - translate a format string between picker and ICU tokens
//! - `options` - print the picker options a field would send to the widget
//! - `check` - validate the vocabularies and the configured picker defaults
//!
//! ```rust
//! use datetimepicker_cli::command::CommandRegistry;
//! use datetimepicker_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//! assert_eq!(registry.list_commands(), ["check", "options", "translate"]);
//! ```

pub mod command;
pub mod commands;

pub use command::{CommandRegistry, ManagementCommand};
