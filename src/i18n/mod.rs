//! Internationalized user-facing messages.
//!
//! A [`Language`] selects one static [`Messages`] table. Nothing here is
//! global: callers resolve the language once and pass the table along.

mod en;
mod fr;
mod language;
mod messages;
mod ru;
mod zh;

pub use language::Language;
pub use messages::Messages;

use crate::error::{CliError, RtagError, StoreError};

/// Message table for `language`
pub fn messages(language: Language) -> &'static Messages {
    match language {
        Language::En => &en::ENGLISH,
        Language::Zh => &zh::CHINESE,
        Language::Fr => &fr::FRENCH,
        Language::Ru => &ru::RUSSIAN,
    }
}

/// Localized description of an error.
///
/// Domain errors get their translated wording; I/O and git failures keep
/// their English detail, which mostly comes from the OS or git anyway.
pub fn describe_error(messages: &Messages, error: &RtagError) -> String {
    match error {
        RtagError::Store(StoreError::Duplicate { tag }) => messages.tag_already_exists(tag),
        RtagError::Store(StoreError::NotFound { tag }) => messages.tag_not_exist(tag),
        RtagError::Store(StoreError::EmptyTag) => messages.tag_cannot_be_empty.to_string(),
        RtagError::Store(e) => e.to_string(),
        RtagError::Cli(CliError::TagNotInStore { tag }) => messages.tag_not_in_store(tag),
        RtagError::Cli(CliError::NoTagsFound) => messages.no_tags_found.to_string(),
        RtagError::Cli(CliError::MissingPushTarget) => messages.specify_tag_or_use_all.to_string(),
        RtagError::Cli(CliError::UnsupportedLanguage { value }) => {
            messages.invalid_language(value, &Language::codes(", "))
        }
        RtagError::Cli(CliError::InputFailed { source }) => {
            messages.read_input_failed(&source.to_string())
        }
        RtagError::Git(e) => e.to_string(),
        RtagError::Config(e) => e.to_string(),
        RtagError::Io(e) => e.to_string(),
        RtagError::Json(e) => e.to_string(),
    }
}
