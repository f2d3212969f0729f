//! The datetime picker form field type.
//!
//! [`DatetimeType`] sits between the form layer and the widget. The form
//! layer asks it for the underlying datetime field's defaults
//! ([`DatetimeType::field_defaults`]) and for the variables handed to the
//! widget template ([`DatetimeType::build_view`]). Both start by merging the
//! bundle-level picker options with the field's own.
//!
//! The `formatter` option says which vocabulary `format` is written in:
//!
//! | formatter | field format | widget format |
//! |---|---|---|
//! | `php` | `format` as written | `to_picker(format)` |
//! | `js` | `to_icu(format)` | `format` as written |

use datetimepicker_core::{i18n, PickerSettings};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::options::{Formatter, PickerOptions};

/// The format used when neither the bundle nor the field sets one.
pub const DEFAULT_FORMAT: &str = "mm/dd/yyyy HH:ii";

/// The language the widget ships with; it is never passed explicitly.
const WIDGET_BUILTIN_LANGUAGE: &str = "en";

/// Template variables for one rendered field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PickerView {
    vars: Map<String, Value>,
}

impl PickerView {
    /// Key under which the resolved picker options are stored.
    pub const PICKER_OPTIONS: &'static str = "pickerOptions";

    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from variables already set by the parent field type.
    pub const fn with_vars(vars: Map<String, Value>) -> Self {
        Self { vars }
    }

    pub const fn vars(&self) -> &Map<String, Value> {
        &self.vars
    }

    /// The resolved picker options, once [`DatetimeType::build_view`] ran.
    pub fn picker_options(&self) -> Option<&Map<String, Value>> {
        self.vars.get(Self::PICKER_OPTIONS).and_then(Value::as_object)
    }

    pub fn into_vars(self) -> Map<String, Value> {
        self.vars
    }
}

/// Default options of the underlying datetime field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefaults {
    /// Always `"single_text"`: the picker drives one text input.
    pub widget: String,
    /// The server-side format of the submitted value, or `None` when the
    /// formatter is missing or unrecognised.
    pub format: Option<String>,
    /// The field's own picker options, before merging.
    pub picker_options: PickerOptions,
}

/// The datetime picker field type.
///
/// # Examples
///
/// ```
/// use datetimepicker_forms::{DatetimeType, PickerOptions};
///
/// let bundle: PickerOptions = [("formatter", "js")].into_iter().collect();
/// let field_type = DatetimeType::new(bundle);
///
/// let field: PickerOptions = [("format", "dd.mm.yyyy hh:ii"), ("language", "de")]
///     .into_iter()
///     .collect();
/// assert_eq!(field_type.field_format(&field).as_deref(), Some("dd.MM.y HH:mm"));
///
/// let view = field_type.build_view_vars(&field);
/// let options = view.picker_options().unwrap();
/// assert_eq!(options["format"], "dd.mm.yyyy hh:ii");
/// assert_eq!(options["language"], "de");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatetimeType {
    options: PickerOptions,
}

impl DatetimeType {
    /// Creates the field type with bundle-level picker options.
    pub const fn new(options: PickerOptions) -> Self {
        Self { options }
    }

    pub fn from_settings(settings: &PickerSettings) -> Self {
        Self::new(PickerOptions::from(settings))
    }

    /// The bundle-level picker options.
    pub const fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Block prefix of the widget template.
    pub const fn block_prefix(&self) -> &'static str {
        "collot_datetime"
    }

    /// The field type this one extends.
    pub const fn parent(&self) -> &'static str {
        "datetime"
    }

    fn merged(&self, field_options: &PickerOptions) -> PickerOptions {
        self.options.merged(field_options)
    }

    /// Resolves the options sent to the widget and stores them in `view`.
    ///
    /// Any existing `pickerOptions` variable is replaced; other variables
    /// are kept.
    pub fn build_view(&self, view: &mut PickerView, field_options: &PickerOptions) {
        let mut picker_options = self.merged(field_options);

        if !picker_options.contains(PickerOptions::LANGUAGE) {
            picker_options.insert(PickerOptions::LANGUAGE, i18n::get_language());
        }
        if picker_options.language() == Some(WIDGET_BUILTIN_LANGUAGE) {
            picker_options.remove(PickerOptions::LANGUAGE);
        }

        if !picker_options.contains(PickerOptions::FORMAT) {
            picker_options.insert(PickerOptions::FORMAT, DEFAULT_FORMAT);
        }

        if picker_options.formatter() == Some(Formatter::Server) {
            if let Some(format) = picker_options.format() {
                let widget_format = Formatter::Server.direction().translate(format);
                tracing::debug!(%format, %widget_format, "translated server format for widget");
                picker_options.insert(PickerOptions::FORMAT, widget_format);
            }
        }

        view.vars.insert(
            PickerView::PICKER_OPTIONS.to_string(),
            picker_options.to_json(),
        );
    }

    /// Like [`build_view`](Self::build_view), starting from an empty view.
    pub fn build_view_vars(&self, field_options: &PickerOptions) -> PickerView {
        let mut view = PickerView::new();
        self.build_view(&mut view, field_options);
        view
    }

    /// The format of the underlying datetime field, in ICU tokens.
    pub fn field_format(&self, field_options: &PickerOptions) -> Option<String> {
        let picker_options = self.merged(field_options);
        let format = picker_options.format().unwrap_or(DEFAULT_FORMAT);

        match picker_options.formatter()? {
            Formatter::Server => Some(format.to_string()),
            formatter @ Formatter::Client => Some(formatter.direction().translate(format)),
        }
    }

    /// Default options of the underlying datetime field.
    pub fn field_defaults(&self, field_options: PickerOptions) -> FieldDefaults {
        FieldDefaults {
            widget: "single_text".to_string(),
            format: self.field_format(&field_options),
            picker_options: field_options,
        }
    }
}
