//! Per-thread active language.
//!
//! The picker needs a language when none is configured. A request handler
//! activates the user's language for the current thread; otherwise the
//! configured `language_code` (or `"en"` before settings are configured)
//! is used.
//!
//! ```
//! use datetimepicker_core::i18n;
//!
//! i18n::activate("fr");
//! assert_eq!(i18n::get_language(), "fr");
//! i18n::deactivate();
//! ```

use std::cell::RefCell;

use crate::settings::SETTINGS;

/// The language used when nothing is activated and settings are not configured.
pub const FALLBACK_LANGUAGE: &str = "en";

thread_local! {
    static CURRENT_LANGUAGE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Activates the given language code for the current thread.
pub fn activate(language_code: &str) {
    CURRENT_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = Some(language_code.to_string());
    });
}

/// Deactivates the current thread's language, reverting to the default.
pub fn deactivate() {
    CURRENT_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Returns the language active on the current thread, if one was activated.
pub fn active_language() -> Option<String> {
    CURRENT_LANGUAGE.with(|cell| cell.borrow().clone())
}

/// Returns the default language: the configured `language_code`, or
/// [`FALLBACK_LANGUAGE`].
pub fn default_language() -> String {
    SETTINGS.try_get().map_or_else(
        || FALLBACK_LANGUAGE.to_string(),
        |settings| settings.language_code.clone(),
    )
}

/// Returns the active language, falling back to [`default_language`].
pub fn get_language() -> String {
    active_language().unwrap_or_else(default_language)
}

/// Puts the saved language back when dropped, including during unwinding.
struct RestoreLanguage(Option<String>);

impl Drop for RestoreLanguage {
    fn drop(&mut self) {
        let previous = self.0.take();
        CURRENT_LANGUAGE.with(|cell| {
            *cell.borrow_mut() = previous;
        });
    }
}

/// Runs `f` with `language_code` active, restoring the previous language after,
/// even if `f` panics.
pub fn with_language<T>(language_code: &str, f: impl FnOnce() -> T) -> T {
    let _restore = RestoreLanguage(active_language());
    activate(language_code);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_and_deactivate() {
        activate("de");
        assert_eq!(get_language(), "de");
        assert_eq!(active_language().as_deref(), Some("de"));
        deactivate();
        assert!(active_language().is_none());
    }

    #[test]
    fn test_with_language_restores_previous() {
        activate("es");
        let inner = with_language("it", get_language);
        assert_eq!(inner, "it");
        assert_eq!(get_language(), "es");
        deactivate();
    }

    #[test]
    fn test_with_language_restores_none() {
        deactivate();
        with_language("ja", || assert_eq!(get_language(), "ja"));
        assert!(active_language().is_none());
    }

    #[test]
    fn test_with_language_restores_after_panic() {
        activate("pl");
        let result = std::panic::catch_unwind(|| {
            with_language("ko", || panic!("rendering failed"));
        });
        assert!(result.is_err());
        assert_eq!(active_language().as_deref(), Some("pl"));
        deactivate();
    }

    #[test]
    fn test_language_is_thread_local() {
        activate("ru");
        let other = std::thread::spawn(active_language).join().unwrap();
        assert!(other.is_none());
        deactivate();
    }
}
