//! Settings for datetimepicker-rs.
//!
//! This module provides the [`Settings`] struct, which holds the integration's
//! configuration, and [`LazySettings`], a globally-accessible, lazily-initialized
//! settings instance.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Bundle-level defaults forwarded to every datetime picker.
///
/// Each field type instance merges its own picker options over these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerSettings {
    /// Which vocabulary `format` is written in: `"js"` (picker tokens) or
    /// `"php"` (ICU tokens). Aliases `client`/`server` are accepted too.
    pub formatter: String,
    /// The default date format. `None` means the built-in default.
    pub format: Option<String>,
    /// The widget language. `None` means the active language.
    pub language: Option<String>,
    /// Any other widget options, passed through untouched.
    pub options: serde_json::Map<String, serde_json::Value>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            formatter: "js".to_string(),
            format: None,
            language: None,
            options: serde_json::Map::new(),
        }
    }
}

impl PickerSettings {
    /// Flattens these settings into a single widget option map.
    ///
    /// Keys from `options` come first; the dedicated fields override them.
    pub fn to_option_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = self.options.clone();
        map.insert(
            "formatter".to_string(),
            serde_json::Value::String(self.formatter.clone()),
        );
        if let Some(format) = &self.format {
            map.insert("format".to_string(), serde_json::Value::String(format.clone()));
        }
        if let Some(language) = &self.language {
            map.insert(
                "language".to_string(),
                serde_json::Value::String(language.clone()),
            );
        }
        map
    }
}

/// The complete set of settings.
///
/// Use [`SETTINGS`] to access the global instance.
///
/// # Examples
///
/// ```
/// use datetimepicker_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.language_code, "en");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
    /// The default language when none has been activated on the thread.
    pub language_code: String,
    /// Bundle-level picker defaults.
    pub picker: PickerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            language_code: "en".to_string(),
            picker: PickerSettings::default(),
        }
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup to set the
/// settings, then use [`get`](LazySettings::get) to access them.
///
/// # Panics
///
/// [`get`](LazySettings::get) panics if settings have not been configured.
/// [`configure`](LazySettings::configure) panics if called more than once.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Returns the configured settings, or `None` before configuration.
    pub fn try_get(&self) -> Option<&Settings> {
        self.inner.get()
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();
