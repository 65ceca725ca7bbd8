//! Interactive tag entry used by `init` and by `add` without an argument.

use crate::error::{CliError, Result};
use crate::i18n::describe_error;
use crate::runtime::RuntimeConfig;
use crate::store::Tag;
use crate::workflow::manage::{add_tag, print_tags};
use std::io::BufRead;

/// Typing this instead of a tag leaves the loop
const EXIT_SENTINEL: &str = "exit";

/// What happened during one interactive session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InteractiveSummary {
    /// Tags added, in order
    pub added: Vec<Tag>,
    /// Tags that could not be added (duplicates, I/O errors)
    pub failed: Vec<String>,
}

/// Result of `init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The store already had tags; they were listed
    Listed(Vec<Tag>),
    /// The store was empty; the interactive loop ran
    Interactive(InteractiveSummary),
}

/// Show the stored tags, or start interactive entry when there are none
pub fn init<R: BufRead>(config: &RuntimeConfig, input: &mut R) -> Result<InitOutcome> {
    let tags = config.store().read_tags()?;
    if !tags.is_empty() {
        print_tags(config, config.messages().current_tags, &tags);
        return Ok(InitOutcome::Listed(tags));
    }

    config.info_println(config.messages().store_empty_or_missing);
    interactive_add(config, input).map(InitOutcome::Interactive)
}

/// Prompt for tags until the user types `exit`, declines to continue, or
/// input ends.
///
/// Blank input is rejected and re-prompted. Failed adds are reported and do
/// not end the loop; only an unreadable input does.
pub fn interactive_add<R: BufRead>(
    config: &RuntimeConfig,
    input: &mut R,
) -> Result<InteractiveSummary> {
    let messages = config.messages();
    let mut summary = InteractiveSummary::default();

    loop {
        config.prompt(messages.enter_tag);
        let Some(line) = read_line(input)? else {
            break;
        };

        let value = line.trim();
        if value == EXIT_SENTINEL {
            break;
        }
        if value.is_empty() {
            config.warning_println(messages.tag_cannot_be_empty);
            continue;
        }

        match add_tag(config, value) {
            Ok(tag) => summary.added.push(tag),
            Err(e) => {
                log::debug!("Interactive add of '{}' failed: {}", value, e);
                config.error_println(&messages.add_tag_failed(&describe_error(messages, &e)));
                summary.failed.push(value.to_string());
            }
        }

        config.prompt(messages.continue_adding);
        let Some(answer) = read_line(input)? else {
            break;
        };
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            break;
        }
    }

    config.println(messages.exit);
    Ok(summary)
}

/// Next line of input, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|source| CliError::InputFailed { source })?;
    Ok((read > 0).then_some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RtagConfig;
    use crate::i18n::Language;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn runtime(temp_dir: &TempDir) -> RuntimeConfig {
        RuntimeConfig::quiet(RtagConfig::new(
            temp_dir.path().join(".rtag"),
            Language::En,
        ))
    }

    fn stored(config: &RuntimeConfig) -> Vec<String> {
        config
            .store()
            .read_tags()
            .expect("read")
            .into_iter()
            .map(Tag::into_inner)
            .collect()
    }

    #[test]
    fn test_adds_until_user_declines() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        let mut input = Cursor::new("web\ny\napi\nYES\nworker\nn\nnever\n");

        let summary = interactive_add(&config, &mut input).expect("interactive");

        assert_eq!(summary.added, vec!["web", "api", "worker"]);
        assert_eq!(stored(&config), vec!["web", "api", "worker"]);
    }

    #[test]
    fn test_exit_sentinel_stops_immediately() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        let mut input = Cursor::new("  exit  \nweb\n");

        let summary = interactive_add(&config, &mut input).expect("interactive");

        assert!(summary.added.is_empty());
        assert!(!config.config().store_path.exists());
    }

    #[test]
    fn test_blank_input_is_reprompted() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        let mut input = Cursor::new("\n   \nweb\nn\n");

        let summary = interactive_add(&config, &mut input).expect("interactive");

        assert_eq!(summary.added, vec!["web"]);
    }

    #[test]
    fn test_duplicate_is_reported_and_loop_continues() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        config.store().add_tag(&Tag::new("web").expect("tag")).expect("seed");
        let mut input = Cursor::new("web\ny\napi\nn\n");

        let summary = interactive_add(&config, &mut input).expect("interactive");

        assert_eq!(summary.failed, vec!["web".to_string()]);
        assert_eq!(summary.added, vec!["api"]);
        assert_eq!(stored(&config), vec!["web", "api"]);
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        let mut input = Cursor::new("web\n");

        let summary = interactive_add(&config, &mut input).expect("interactive");

        assert_eq!(summary.added, vec!["web"]);
    }

    #[test]
    fn test_init_lists_existing_tags() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        config.store().add_tag(&Tag::new("v1").expect("tag")).expect("seed");
        let mut input = Cursor::new("should-not-be-read\n");

        let outcome = init(&config, &mut input).expect("init");

        assert_eq!(outcome, InitOutcome::Listed(vec![Tag::new("v1").expect("tag")]));
        assert_eq!(stored(&config), vec!["v1"]);
    }

    #[test]
    fn test_init_on_empty_store_prompts() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        let mut input = Cursor::new("v1\nn\n");

        let outcome = init(&config, &mut input).expect("init");

        assert!(matches!(outcome, InitOutcome::Interactive(ref s) if s.added.len() == 1));
        assert_eq!(stored(&config), vec!["v1"]);
    }
}
