//! Management command framework.
//!
//! This module provides the [`ManagementCommand`] trait for defining CLI
//! commands and [`CommandRegistry`] for registering and dispatching them.
//!
//! ## Defining a Custom Command
//!
//! ```rust
//! use std::io::Write;
//!
//! use datetimepicker_cli::command::ManagementCommand;
//! use datetimepicker_core::{PickerResult, Settings};
//!
//! struct GreetCommand;
//!
//! impl ManagementCommand for GreetCommand {
//!     fn name(&self) -> &'static str { "greet" }
//!     fn help(&self) -> &'static str { "Say hello" }
//!
//!     fn handle(
//!         &self,
//!         _matches: &clap::ArgMatches,
//!         _settings: &Settings,
//!         out: &mut dyn Write,
//!     ) -> PickerResult<()> {
//!         writeln!(out, "Hello")?;
//!         Ok(())
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::io::Write;

use datetimepicker_core::{logging, PickerError, PickerResult, Settings};

/// A command that can be registered and invoked through the CLI.
///
/// Commands write their output to `out` so that callers (and tests) choose
/// where it goes.
pub trait ManagementCommand: Send + Sync {
    /// Returns the name of this command (used to invoke it from the CLI).
    fn name(&self) -> &'static str;

    /// Returns a short help description for this command.
    fn help(&self) -> &'static str;

    /// Adds custom arguments to the clap command.
    ///
    /// The default implementation returns the command unchanged.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Executes the command with the given argument matches and settings.
    fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> PickerResult<()>;
}

/// A registry of management commands, keyed by name.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn ManagementCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command, replacing any command with the same name.
    pub fn register(&mut self, command: Box<dyn ManagementCommand>) {
        self.commands.insert(command.name(), command);
    }

    /// Returns the command with the given name, if registered.
    pub fn get(&self, name: &str) -> Option<&dyn ManagementCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Returns a sorted list of all registered command names.
    pub fn list_commands(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the top-level clap `Command` with every registered subcommand.
    ///
    /// A global `--settings <FILE>` option is available to all subcommands.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("datetimepicker")
            .about("datetimepicker format and option utility")
            .subcommand_required(true)
            .arg(
                clap::Arg::new("settings")
                    .long("settings")
                    .global(true)
                    .value_name("FILE")
                    .help("TOML or JSON settings file"),
            );

        for name in self.list_commands() {
            if let Some(cmd) = self.get(name) {
                let subcmd = clap::Command::new(name).about(cmd.help());
                app = app.subcommand(cmd.add_arguments(subcmd));
            }
        }

        app
    }

    /// Dispatches to the subcommand named in `matches`.
    pub fn execute(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> PickerResult<()> {
        let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
            PickerError::ConfigurationError("No subcommand specified".to_string())
        })?;

        let cmd = self.get(name).ok_or_else(|| {
            PickerError::ConfigurationError(format!("Unknown command: {name}"))
        })?;

        let span = logging::command_span(name);
        let _guard = span.enter();
        cmd.handle(sub_matches, settings, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoCommand;

    impl ManagementCommand for EchoCommand {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn help(&self) -> &'static str {
            "Echo the argument"
        }

        fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
            cmd.arg(clap::Arg::new("text").required(true))
        }

        fn handle(
            &self,
            matches: &clap::ArgMatches,
            _settings: &Settings,
            out: &mut dyn Write,
        ) -> PickerResult<()> {
            let text = matches.get_one::<String>("text").map_or("", String::as_str);
            writeln!(out, "{text}")?;
            Ok(())
        }
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(EchoCommand));
        registry
    }

    #[test]
    fn test_register_and_get() {
        let registry = registry();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert!(registry.get("echo").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = registry();
        registry.register(Box::new(EchoCommand));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_execute_dispatches() {
        let registry = registry();
        let matches = registry
            .build_cli()
            .try_get_matches_from(["datetimepicker", "echo", "hi"])
            .unwrap();
        let mut out = Vec::new();
        registry
            .execute(&matches, &Settings::default(), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hi\n");
    }

    #[test]
    fn test_global_settings_flag_after_subcommand() {
        let registry = registry();
        let matches = registry
            .build_cli()
            .try_get_matches_from(["datetimepicker", "echo", "hi", "--settings", "p.toml"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("settings").map(String::as_str),
            Some("p.toml")
        );
    }

    #[test]
    fn test_subcommand_required() {
        let registry = registry();
        assert!(registry
            .build_cli()
            .try_get_matches_from(["datetimepicker"])
            .is_err());
    }
}
