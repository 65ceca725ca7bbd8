//! Per-invocation configuration.
//!
//! Everything an operation needs to know about its environment is resolved
//! once into an [`RtagConfig`] and passed explicitly.

mod detect;
mod preference;

pub use detect::{LANGUAGE_ENV, LanguageSource, detect_language, platform_language};
pub use preference::{load_language, preference_path, save_language};

use crate::i18n::Language;
use crate::store::DEFAULT_STORE_FILE;
use std::path::PathBuf;

/// Configuration for one rtag invocation
#[derive(Debug, Clone)]
pub struct RtagConfig {
    /// Tag file path
    pub store_path: PathBuf,
    /// Interface language
    pub language: Language,
    /// Where `language` came from
    pub language_source: LanguageSource,
}

impl RtagConfig {
    /// Configuration with an explicit language, used by tests and embedders
    pub fn new<P: Into<PathBuf>>(store_path: P, language: Language) -> Self {
        Self {
            store_path: store_path.into(),
            language,
            language_source: LanguageSource::Default,
        }
    }

    /// Resolve the language from the process environment, the saved
    /// preference and the OS locale
    pub fn resolve<P: Into<PathBuf>>(store_path: P) -> Self {
        let preference = preference_path();
        let (mut language, mut language_source) =
            detect_language(|key| std::env::var(key).ok(), preference.as_deref());

        if language_source == LanguageSource::Default
            && let Some(detected) = platform_language()
        {
            language = detected;
            language_source = LanguageSource::SystemLocale;
        }

        log::debug!("Language '{}' from {}", language, language_source);

        Self {
            store_path: store_path.into(),
            language,
            language_source,
        }
    }
}

impl Default for RtagConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE, Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_conventional_store() {
        let config = RtagConfig::default();
        assert_eq!(config.store_path, PathBuf::from(".rtag"));
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn test_resolve_keeps_store_path() {
        let config = RtagConfig::resolve("custom/tags");
        assert_eq!(config.store_path, PathBuf::from("custom/tags"));
    }
}
