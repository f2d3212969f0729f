//! The `datetimepicker` binary.

use std::process::ExitCode;

use datetimepicker_cli::command::CommandRegistry;
use datetimepicker_cli::commands::register_builtin_commands;
use datetimepicker_core::{logging, settings_loader, PickerResult, Settings, SETTINGS};

fn load_settings(matches: &clap::ArgMatches) -> PickerResult<Settings> {
    match matches.get_one::<String>("settings") {
        Some(path) => settings_loader::from_path_with_env(path),
        None => Ok(settings_loader::from_env()),
    }
}

fn main() -> ExitCode {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    let matches = registry.build_cli().get_matches();

    let settings = match load_settings(&matches) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(exit_status(err.exit_code()));
        }
    };
    logging::setup_logging(&settings);
    SETTINGS.configure(settings);

    let mut stdout = std::io::stdout().lock();
    match registry.execute(&matches, SETTINGS.get(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("{err}");
            ExitCode::from(exit_status(err.exit_code()))
        }
    }
}

fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
