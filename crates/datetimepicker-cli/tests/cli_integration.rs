//! End-to-end tests driving the command registry the way the binary does.

use datetimepicker_cli::command::CommandRegistry;
use datetimepicker_cli::commands::register_builtin_commands;
use datetimepicker_core::{settings_loader, PickerResult, Settings};

fn run(args: &[&str], settings: &Settings) -> (PickerResult<()>, String) {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    let matches = registry
        .build_cli()
        .try_get_matches_from(args)
        .unwrap();
    let mut out = Vec::new();
    let result = registry.execute(&matches, settings, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_translate_round_trip_through_cli() {
    let settings = Settings::default();
    let (result, icu) = run(&["datetimepicker", "translate", "dd/mm/yyyy hh:ii"], &settings);
    result.unwrap();
    assert_eq!(icu, "dd/MM/y HH:mm\n");

    let (result, picker) = run(
        &["datetimepicker", "translate", "--to", "picker", icu.trim_end()],
        &settings,
    );
    result.unwrap();
    assert_eq!(picker, "dd/mm/yyyy hh:ii\n");
}

#[test]
fn test_options_from_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("picker.toml");
    std::fs::write(
        &path,
        "[picker]\nformatter = \"php\"\nformat = \"d MMM y\"\nlanguage = \"fr\"\n",
    )
    .unwrap();
    let settings = settings_loader::from_toml_file(&path).unwrap();

    let (result, printed) = run(&["datetimepicker", "options"], &settings);
    result.unwrap();
    let resolved: serde_json::Value = serde_json::from_str(&printed).unwrap();
    assert_eq!(resolved["fieldFormat"], "d MMM y");
    assert_eq!(resolved["pickerOptions"]["format"], "d M yyyy");
    assert_eq!(resolved["pickerOptions"]["language"], "fr");
}

#[test]
fn test_check_reports_bad_formatter() {
    let settings = settings_loader::from_json_str(r#"{"picker": {"formatter": "rb"}}"#).unwrap();
    let (result, printed) = run(&["datetimepicker", "check"], &settings);
    assert_eq!(result.unwrap_err().exit_code(), 78);
    assert!(printed.contains("picker.E001"));
}

#[test]
fn test_unknown_subcommand_is_rejected_by_parser() {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);
    assert!(registry
        .build_cli()
        .try_get_matches_from(["datetimepicker", "runserver"])
        .is_err());
}
