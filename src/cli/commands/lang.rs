//! Lang command implementation.

use crate::config::{preference_path, save_language};
use crate::error::{CliError, ConfigError, Result};
use crate::i18n::{self, Language};
use crate::runtime::RuntimeConfig;

/// Execute lang command: show the language settings, or save a new one
pub(super) fn execute_lang(config: &RuntimeConfig, value: Option<&str>) -> Result<i32> {
    let Some(value) = value else {
        show_language(config);
        return Ok(0);
    };

    let language = Language::parse(value).ok_or_else(|| CliError::UnsupportedLanguage {
        value: value.to_string(),
    })?;
    let path = preference_path().ok_or(ConfigError::NoConfigDir)?;
    save_language(&path, language)?;

    // Confirm in the language just chosen
    let messages = i18n::messages(language);
    config.success_println(&messages.language_set_to(language.native_name()));
    config.println(messages.language_preference_saved);
    config.println(messages.language_change_note);
    Ok(0)
}

fn show_language(config: &RuntimeConfig) {
    let messages = config.messages();
    let current = config.config().language;

    config.println(&format!(
        "{}: {} ({})",
        messages.current_language,
        current.native_name(),
        current.code()
    ));
    config.println("");
    config.println(&format!("{}:", messages.available_languages));
    for language in Language::ALL {
        config.println(&format!("  {} - {}", language.code(), language.native_name()));
    }
    config.println("");
    config.println(&messages.language_usage(&Language::codes("|")));
    config.println(&messages.environment_variable(&Language::codes("|")));
    if let Some(path) = preference_path() {
        config.println(&messages.config_file(&path.display().to_string()));
    }
}
