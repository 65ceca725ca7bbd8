//! Shared helper functions for command execution.

use crate::cli::Command;
use crate::error::{CliError, RtagError};
use crate::i18n::{Messages, describe_error};
use crate::runtime::RuntimeConfig;

/// Localized line reporting that `command` failed with `error`
pub(super) fn failure_message(messages: &Messages, command: &Command, error: &RtagError) -> String {
    let detail = describe_error(messages, error);
    if matches!(error, RtagError::Cli(CliError::InputFailed { .. })) {
        return detail;
    }

    match command {
        Command::Init => messages.error_reading_store(&detail),
        Command::Add { .. } => messages.add_tag_failed(&detail),
        Command::List { .. } => messages.read_tags_failed(&detail),
        Command::Rm { .. } => messages.remove_tag_failed(&detail),
        Command::Push { .. } | Command::Lang { .. } => detail,
    }
}

/// Print recovery suggestions for `error`, if it has any
pub(super) fn print_recovery_suggestions(config: &RuntimeConfig, error: &RtagError) {
    let suggestions = error.recovery_suggestions();
    if suggestions.is_empty() {
        return;
    }

    config.println("\n💡 Recovery suggestions:");
    for suggestion in suggestions {
        config.indent(&suggestion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::i18n::{self, Language};

    #[test]
    fn test_add_failure_wording() {
        let error = RtagError::from(StoreError::Duplicate {
            tag: "v1".to_string(),
        });
        let message = failure_message(
            i18n::messages(Language::En),
            &Command::Add {
                tag: Some("v1".to_string()),
            },
            &error,
        );
        assert_eq!(message, "Failed to add tag: tag 'v1' already exists");
    }

    #[test]
    fn test_push_failure_is_bare() {
        let error = RtagError::from(CliError::TagNotInStore {
            tag: "missing-tag".to_string(),
        });
        let message = failure_message(
            i18n::messages(Language::En),
            &Command::Push {
                tag: Some("missing-tag".to_string()),
                all: false,
            },
            &error,
        );
        assert_eq!(message, "Tag 'missing-tag' does not exist in .rtag file");
    }

    #[test]
    fn test_rm_failure_is_localized() {
        let error = RtagError::from(StoreError::NotFound {
            tag: "v9".to_string(),
        });
        let message = failure_message(
            i18n::messages(Language::Fr),
            &Command::Rm {
                tag: "v9".to_string(),
            },
            &error,
        );
        let fr = i18n::messages(Language::Fr);
        assert_eq!(message, fr.remove_tag_failed(&fr.tag_not_exist("v9")));
    }
}
