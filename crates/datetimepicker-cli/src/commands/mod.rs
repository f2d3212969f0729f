//! Built-in management commands.

pub mod check;
pub mod options;
pub mod translate;

pub use check::CheckCommand;
pub use options::OptionsCommand;
pub use translate::TranslateCommand;

use crate::command::CommandRegistry;

/// Registers all built-in commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(TranslateCommand));
    registry.register(Box::new(OptionsCommand));
    registry.register(Box::new(CheckCommand));
}
