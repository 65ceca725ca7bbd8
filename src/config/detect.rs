//! Language detection: environment variable, saved preference, OS locale.

use crate::config::preference;
use crate::i18n::Language;
use std::fmt;
use std::path::Path;

/// Environment variable that overrides every other language source
pub const LANGUAGE_ENV: &str = "RTAG_LANG";

/// Locale variables, in POSIX precedence order
const LOCALE_ENV_VARS: [&str; 4] = ["LC_ALL", "LC_MESSAGES", "LANG", "LANGUAGE"];

/// Where the active language came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    /// `RTAG_LANG`
    Environment,
    /// The preference file written by `rtag lang`
    SavedPreference,
    /// Locale environment variables or the OS setting
    SystemLocale,
    /// Nothing matched
    Default,
}

impl fmt::Display for LanguageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LanguageSource::Environment => LANGUAGE_ENV,
            LanguageSource::SavedPreference => "saved preference",
            LanguageSource::SystemLocale => "system locale",
            LanguageSource::Default => "default",
        };
        f.write_str(label)
    }
}

/// Resolve the language from `env` lookups and the preference file.
///
/// `env` is injected so detection can be exercised without touching the
/// process environment.
pub fn detect_language<E>(env: E, preference_path: Option<&Path>) -> (Language, LanguageSource)
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(value) = env(LANGUAGE_ENV).filter(|v| !v.trim().is_empty()) {
        match Language::from_code(&value.to_lowercase()) {
            Some(language) => return (language, LanguageSource::Environment),
            None => log::warn!("Ignoring unsupported {}={}", LANGUAGE_ENV, value),
        }
    }

    if let Some(language) = preference_path.and_then(preference::load_language) {
        return (language, LanguageSource::SavedPreference);
    }

    if let Some(language) = locale_language(&env) {
        return (language, LanguageSource::SystemLocale);
    }

    (Language::default(), LanguageSource::Default)
}

/// First non-English language named by the locale variables.
///
/// English is the default anyway, so an English locale does not stop the
/// search; `LANG=en_US.UTF-8 LANGUAGE=zh_CN` selects Chinese.
fn locale_language<E>(env: &E) -> Option<Language>
where
    E: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .into_iter()
        .filter_map(|var| env(var))
        .filter_map(|value| Language::from_locale(&value))
        .find(|language| *language != Language::En)
}

/// Ask the OS for its UI language where locale variables are not the norm
pub fn platform_language() -> Option<Language> {
    let locale = platform_locale()?;
    Language::from_locale(&locale).filter(|language| *language != Language::En)
}

#[cfg(target_os = "macos")]
fn platform_locale() -> Option<String> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleLanguages"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    first_apple_language(&String::from_utf8_lossy(&output.stdout))
}

/// Most preferred entry of a `defaults read -g AppleLanguages` listing,
/// e.g. `en-US` from `("en-US", "zh-Hans-CN")`
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn first_apple_language(listing: &str) -> Option<String> {
    listing
        .split([',', '\n'])
        .map(|entry| entry.trim_matches(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '"')))
        .find(|entry| !entry.is_empty())
        .map(str::to_string)
}

#[cfg(windows)]
fn platform_locale() -> Option<String> {
    std::env::var("USERLANG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(powershell_culture)
}

/// Culture name reported by PowerShell, e.g. `zh-CN`
#[cfg(windows)]
fn powershell_culture() -> Option<String> {
    let output = std::process::Command::new("powershell")
        .args(["-NoProfile", "-Command", "(Get-Culture).Name"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    culture_name(&String::from_utf8_lossy(&output.stdout))
}

/// Trimmed `Get-Culture` output; the invariant culture prints an empty name
#[cfg_attr(not(windows), allow(dead_code))]
fn culture_name(output: &str) -> Option<String> {
    let culture = output.trim();
    (!culture.is_empty()).then(|| culture.to_string())
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_locale() -> Option<String> {
    None
}
