//! The `options` command.
//!
//! Prints what a datetime field built from the loaded settings would use:
//! the underlying field's format and the options sent to the widget.
//!
//! ```text
//! $ datetimepicker options --set format=dd.mm.yyyy --set autoclose=true --language de
//! {
//!   "fieldFormat": "dd.MM.y",
//!   "pickerOptions": { "autoclose": true, "format": "dd.mm.yyyy", ... }
//! }
//! ```

use std::io::Write;

use datetimepicker_core::{i18n, PickerError, PickerResult, Settings};
use datetimepicker_forms::{DatetimeType, PickerOptions};
use serde_json::{json, Value};

use crate::command::ManagementCommand;

/// Prints the resolved field format and picker options.
pub struct OptionsCommand;

/// Parses a `key=value` pair. Values that parse as JSON keep their type;
/// anything else is a string.
fn parse_assignment(raw: &str) -> PickerResult<(String, Value)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        PickerError::invalid_option(raw, "expected KEY=VALUE")
    })?;
    if key.is_empty() {
        return Err(PickerError::invalid_option(raw, "empty option name"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

impl ManagementCommand for OptionsCommand {
    fn name(&self) -> &'static str {
        "options"
    }

    fn help(&self) -> &'static str {
        "Show the field format and widget options for a datetime field"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("set")
                .long("set")
                .short('s')
                .value_name("KEY=VALUE")
                .action(clap::ArgAction::Append)
                .help("Set a field-level picker option"),
        )
        .arg(
            clap::Arg::new("language")
                .long("language")
                .help("Language active while resolving options"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> PickerResult<()> {
        let mut field_options = PickerOptions::new();
        for raw in matches.get_many::<String>("set").into_iter().flatten() {
            let (key, value) = parse_assignment(raw)?;
            field_options.insert(key, value);
        }

        let field_type = DatetimeType::from_settings(&settings.picker);
        let resolve = || {
            let view = field_type.build_view_vars(&field_options);
            json!({
                "fieldFormat": field_type.field_format(&field_options),
                "pickerOptions": view.picker_options(),
            })
        };
        let resolved = match matches.get_one::<String>("language") {
            Some(language) => i18n::with_language(language, resolve),
            None => resolve(),
        };

        tracing::debug!(options = field_options.len(), "resolved picker options");
        writeln!(out, "{}", serde_json::to_string_pretty(&resolved)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str], settings: &Settings) -> PickerResult<Value> {
        let cmd = OptionsCommand;
        let matches = cmd
            .add_arguments(clap::Command::new("options"))
            .try_get_matches_from(args)
            .unwrap();
        let mut out = Vec::new();
        cmd.handle(&matches, settings, &mut out)?;
        Ok(serde_json::from_slice(&out).unwrap())
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("autoclose=true").unwrap(),
            ("autoclose".to_string(), Value::Bool(true))
        );
        assert_eq!(
            parse_assignment("format=dd/mm/yyyy").unwrap(),
            ("format".to_string(), Value::from("dd/mm/yyyy"))
        );
        assert_eq!(parse_assignment("minuteStep=5").unwrap().1, Value::from(5));
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn test_options_defaults() {
        let resolved = run(&["options", "--language", "en"], &Settings::default()).unwrap();
        assert_eq!(resolved["fieldFormat"], "MM/dd/y hh:mm");
        assert_eq!(resolved["pickerOptions"]["format"], "mm/dd/yyyy HH:ii");
        assert!(resolved["pickerOptions"].get("language").is_none());
    }

    #[test]
    fn test_options_with_assignments_and_language() {
        let resolved = run(
            &["options", "-s", "format=dd.mm.yyyy", "-s", "todayBtn=true", "--language", "de"],
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(resolved["fieldFormat"], "dd.MM.y");
        assert_eq!(resolved["pickerOptions"]["language"], "de");
        assert_eq!(resolved["pickerOptions"]["todayBtn"], true);
    }

    #[test]
    fn test_options_server_formatter() {
        let mut settings = Settings::default();
        settings.picker.formatter = "php".to_string();
        let resolved = run(&["options", "-s", "format=dd/MM/y", "-s", "language=fr"], &settings)
            .unwrap();
        assert_eq!(resolved["fieldFormat"], "dd/MM/y");
        assert_eq!(resolved["pickerOptions"]["format"], "dd/mm/yyyy");
    }

    #[test]
    fn test_options_bad_assignment() {
        let err = run(&["options", "--set", "oops"], &Settings::default()).unwrap_err();
        assert!(matches!(err, PickerError::InvalidOption { .. }));
    }
}
