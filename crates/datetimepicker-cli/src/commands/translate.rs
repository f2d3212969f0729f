//! The `translate` command.
//!
//! ```text
//! $ datetimepicker translate "mm/dd/yyyy HH:ii"
//! MM/dd/y hh:mm
//! $ datetimepicker translate --to picker "dd.MM.y"
//! dd.mm.yyyy
//! ```

use std::io::Write;

use datetimepicker_core::{PickerResult, Settings};
use datetimepicker_format::Direction;

use crate::command::ManagementCommand;

/// Translates a format string between picker and ICU tokens.
pub struct TranslateCommand;

impl ManagementCommand for TranslateCommand {
    fn name(&self) -> &'static str {
        "translate"
    }

    fn help(&self) -> &'static str {
        "Translate a date format between picker and ICU tokens"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("format")
                .required(true)
                .help("The format string to translate"),
        )
        .arg(
            clap::Arg::new("to")
                .long("to")
                .value_parser(["icu", "picker"])
                .default_value("icu")
                .help("Target vocabulary"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        _settings: &Settings,
        out: &mut dyn Write,
    ) -> PickerResult<()> {
        let format = matches.get_one::<String>("format").map_or("", String::as_str);
        let direction = match matches.get_one::<String>("to").map(String::as_str) {
            Some("picker") => Direction::IcuToPicker,
            _ => Direction::PickerToIcu,
        };

        let translated = direction.translate(format);
        tracing::info!(%direction, format, %translated, "translated format");
        writeln!(out, "{translated}")?;
        Ok(())
    }
}
