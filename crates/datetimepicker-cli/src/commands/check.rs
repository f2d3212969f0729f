//! The `check` command.
//!
//! Validates the token vocabularies and the configured picker defaults.

use std::io::Write;

use datetimepicker_core::{PickerError, PickerResult, Settings};
use datetimepicker_format::{FormatMapping, FormatString, TokenVocabulary, ICU, PICKER};
use datetimepicker_forms::{Formatter, PickerOptions};

use crate::command::ManagementCommand;

/// Runs configuration checks.
pub struct CheckCommand;

/// The result of a single check.
#[derive(Debug, Clone)]
pub struct CheckMessage {
    pub level: CheckLevel,
    pub msg: String,
    pub hint: Option<String>,
    /// A unique identifier for this check (e.g. "picker.W001").
    pub id: &'static str,
}

/// Severity levels for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckLevel {
    Warning,
    Error,
}

impl std::fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Runs all checks against the given settings.
pub fn run_checks(settings: &Settings) -> Vec<CheckMessage> {
    let mut messages = Vec::new();

    for (from, to) in [(PICKER, ICU), (ICU, PICKER)] {
        if let Err(err) = FormatMapping::new(&from, &to) {
            messages.push(CheckMessage {
                level: CheckLevel::Error,
                msg: err.to_string(),
                hint: None,
                id: "format.E001",
            });
        }
    }

    let options = PickerOptions::from(&settings.picker);
    let formatter = match options.try_formatter() {
        Ok(formatter) => formatter,
        Err(err) => {
            messages.push(CheckMessage {
                level: CheckLevel::Error,
                msg: err.to_string(),
                hint: Some("Set picker.formatter to \"js\" or \"php\"".to_string()),
                id: "picker.E001",
            });
            None
        }
    };

    if let (Some(formatter), Some(format)) = (formatter, settings.picker.format.as_deref()) {
        let vocabulary = match formatter {
            Formatter::Server => ICU,
            Formatter::Client => PICKER,
        };
        let unknown = unknown_tokens(format, &vocabulary);
        if unknown.is_empty() {
            let direction = formatter.direction();
            let round_trip = direction.reverse().translate(&direction.translate(format));
            if round_trip != format {
                messages.push(CheckMessage {
                    level: CheckLevel::Warning,
                    msg: format!(
                        "picker.format {format:?} reads back as {round_trip:?} after {direction} translation"
                    ),
                    hint: Some(
                        "The widget and the field disagree on some tokens of this format".to_string(),
                    ),
                    id: "picker.W003",
                });
            }
        } else {
            messages.push(CheckMessage {
                level: CheckLevel::Warning,
                msg: format!(
                    "picker.format {format:?} has segments outside the {} vocabulary: {}",
                    vocabulary.name(),
                    unknown.join(", ")
                ),
                hint: Some("Unknown segments are passed through untranslated".to_string()),
                id: "picker.W001",
            });
        }
    }

    if settings.picker.language.as_deref() == Some("en") {
        messages.push(CheckMessage {
            level: CheckLevel::Warning,
            msg: "picker.language is \"en\", which is never sent to the widget".to_string(),
            hint: Some("Remove picker.language to follow the active language".to_string()),
            id: "picker.W002",
        });
    }

    messages
}

fn unknown_tokens<'a>(format: &'a str, vocabulary: &TokenVocabulary<'_>) -> Vec<&'a str> {
    let mut unknown: Vec<&str> = Vec::new();
    for token in FormatString::new(format).tokens() {
        if !vocabulary.contains(token) && !unknown.contains(&token) {
            unknown.push(token);
        }
    }
    unknown
}

impl ManagementCommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn help(&self) -> &'static str {
        "Check the format vocabularies and picker settings"
    }

    fn handle(
        &self,
        _matches: &clap::ArgMatches,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> PickerResult<()> {
        let messages = run_checks(settings);

        for msg in &messages {
            let hint_text = msg
                .hint
                .as_ref()
                .map_or(String::new(), |h| format!("\n\tHINT: {h}"));
            writeln!(out, "{} ({}): {}{}", msg.level, msg.id, msg.msg, hint_text)?;
        }

        let errors = messages.iter().filter(|m| m.level == CheckLevel::Error).count();
        let warnings = messages.len() - errors;
        writeln!(
            out,
            "Check identified {} issue(s) ({errors} error(s), {warnings} warning(s))",
            messages.len()
        )?;
        tracing::info!(errors, warnings, "checks finished");

        if errors > 0 {
            return Err(PickerError::ImproperlyConfigured(format!(
                "check found {errors} error(s)"
            )));
        }
        Ok(())
    }
}
