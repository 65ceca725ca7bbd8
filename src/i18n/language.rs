//! Supported interface languages and locale matching.

use std::fmt;

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Chinese
    Zh,
    /// French
    Fr,
    /// Russian
    Ru,
}

impl Language {
    /// Every supported language, in display order
    pub const ALL: [Language; 4] = [Language::En, Language::Zh, Language::Fr, Language::Ru];

    /// Short code stored in the preference file, e.g. `zh`
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Fr => "fr",
            Language::Ru => "ru",
        }
    }

    /// English name of the language
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "Chinese",
            Language::Fr => "French",
            Language::Ru => "Russian",
        }
    }

    /// Name of the language in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "中文",
            Language::Fr => "Français",
            Language::Ru => "Русский",
        }
    }

    /// Identifiers searched for in locale strings
    fn locale_keys(self) -> &'static [&'static str] {
        match self {
            Language::En => &["en", "english"],
            Language::Zh => &["zh", "chinese", "cn", "tw", "hk", "mo"],
            Language::Fr => &["fr", "french", "francais"],
            Language::Ru => &["ru", "russian", "русский"],
        }
    }

    /// Exact match on a language code, as stored in the preference file
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Parse a user-supplied language: a code or a language name,
    /// case-insensitive (`en`, `English`, `zh`, `中文`, `francais`, ...)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|lang| {
            lang.code() == value
                || lang.name().to_lowercase() == value
                || lang.native_name().to_lowercase() == value
                || lang.locale_keys().contains(&value.as_str())
        })
    }

    /// Match a locale string such as `zh_CN.UTF-8` or `fr-FR`.
    ///
    /// Non-English languages are checked first so that strings like
    /// `french` are not claimed by the `en` key.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let locale = locale.trim().to_lowercase();
        if locale.is_empty() {
            return None;
        }

        [Language::Zh, Language::Fr, Language::Ru, Language::En]
            .into_iter()
            .find(|lang| lang.locale_keys().iter().any(|key| locale.contains(key)))
    }

    /// Codes joined by `separator`, e.g. `en|zh|fr|ru`
    pub fn codes(separator: &str) -> String {
        Self::ALL
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
