//! Push workflow: stamp each selected tag, create it locally, push once.

use crate::error::{CliError, Result, RtagError};
use crate::git::{DEFAULT_REMOTE, Pusher, TagCreator};
use crate::i18n::describe_error;
use crate::runtime::RuntimeConfig;
use crate::stamp::ReleaseStamp;
use crate::store::Tag;

/// Which stored tags a push operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushSelection {
    /// Every tag in the store
    All,
    /// One tag, which must already be in the store
    Single(String),
}

impl PushSelection {
    /// Build the selection from `push [tag] [--all]`; `--all` takes precedence
    pub fn from_args(tag: Option<&str>, all: bool) -> Result<Self> {
        match (tag, all) {
            (_, true) => Ok(PushSelection::All),
            (Some(tag), false) => Ok(PushSelection::Single(tag.to_string())),
            (None, false) => Err(CliError::MissingPushTarget.into()),
        }
    }
}

/// Resolve `selection` against the store.
///
/// Fails with [`CliError::NoTagsFound`] for `All` on an empty store and with
/// [`CliError::TagNotInStore`] when a single tag was never added.
pub fn select_tags(config: &RuntimeConfig, selection: &PushSelection) -> Result<Vec<Tag>> {
    let store = config.store();

    match selection {
        PushSelection::All => {
            let stored = store.read_tags()?;
            if stored.is_empty() {
                return Err(CliError::NoTagsFound.into());
            }
            Ok(stored)
        }
        PushSelection::Single(raw) => {
            let not_in_store = || CliError::TagNotInStore { tag: raw.clone() };
            let tag = Tag::new(raw).map_err(|_| not_in_store())?;
            if !store.contains(&tag)? {
                return Err(not_in_store().into());
            }
            Ok(vec![tag])
        }
    }
}

/// Outcome of creating one release tag
#[derive(Debug)]
pub struct TagOutcome {
    /// Stored tag
    pub tag: Tag,
    /// Derived git tag name
    pub git_tag: String,
    /// Why `git tag` failed, if it did
    pub error: Option<RtagError>,
}

impl TagOutcome {
    /// Whether the local git tag was created
    pub fn is_created(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything a push attempted
#[derive(Debug)]
pub struct PushReport {
    /// Timestamp shared by every derived tag
    pub stamp: ReleaseStamp,
    /// One entry per selected tag, in store order
    pub outcomes: Vec<TagOutcome>,
    /// Why the final `git push` failed, if it did
    pub push_error: Option<RtagError>,
}

impl PushReport {
    /// Whether the final push succeeded
    pub fn pushed(&self) -> bool {
        self.push_error.is_none()
    }

    /// Derived names whose `git tag` failed
    pub fn failed_tags(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.is_created())
            .map(|outcome| outcome.git_tag.as_str())
            .collect()
    }
}

/// Create `release-<stamp>-<tag>` for each tag, then push all tags to
/// `origin` once.
///
/// A failed `git tag` is printed and the next tag is still attempted; tags
/// already created are never rolled back. The push runs even when every
/// creation failed, so tags left over from earlier runs still go out.
pub async fn push_tags<G>(
    config: &RuntimeConfig,
    git: &G,
    tags: &[Tag],
    stamp: ReleaseStamp,
) -> PushReport
where
    G: TagCreator + Pusher,
{
    let messages = config.messages();
    config.info_println(&messages.start_pushing_tags(stamp.timestamp()));

    let mut outcomes = Vec::with_capacity(tags.len());
    for tag in tags {
        let git_tag = stamp.git_tag_name(tag);
        config.println(&messages.create_git_tag(&git_tag));

        let error = git.create_tag(&git_tag).await.err();
        if let Some(e) = &error {
            log::warn!("Creating {} failed: {}", git_tag, e);
            config.warning_println(
                &messages.create_tag_failed(&git_tag, &describe_error(messages, e)),
            );
        }

        outcomes.push(TagOutcome {
            tag: tag.clone(),
            git_tag,
            error,
        });
    }

    config.println(messages.pushing_tags_to_remote);
    let push_error = git.push_tags(DEFAULT_REMOTE).await.err();
    match &push_error {
        None => config.success_println(messages.push_tags_success),
        Some(e) => {
            config.error_println(&messages.push_tags_failed(&describe_error(messages, e)))
        }
    }

    PushReport {
        stamp,
        outcomes,
        push_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RtagConfig;
    use crate::error::GitError;
    use crate::i18n::Language;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use tempfile::TempDir;

    /// Records every git call; fails `git tag` for names in `failing_tags`
    #[derive(Default)]
    struct RecordingGit {
        calls: RefCell<Vec<String>>,
        failing_tags: HashSet<String>,
        fail_push: bool,
    }

    impl RecordingGit {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl TagCreator for RecordingGit {
        async fn create_tag(&self, name: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("tag {}", name));
            if self.failing_tags.contains(name) {
                return Err(GitError::NotInstalled.into());
            }
            Ok(())
        }
    }

    impl Pusher for RecordingGit {
        async fn push_tags(&self, remote: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("push {} --tags", remote));
            if self.fail_push {
                return Err(GitError::NotInstalled.into());
            }
            Ok(())
        }
    }

    fn runtime(temp_dir: &TempDir) -> RuntimeConfig {
        RuntimeConfig::quiet(RtagConfig::new(
            temp_dir.path().join(".rtag"),
            Language::En,
        ))
    }

    fn seed(config: &RuntimeConfig, names: &[&str]) {
        for name in names {
            config
                .store()
                .add_tag(&Tag::new(name).expect("tag"))
                .expect("seed");
        }
    }

    fn noon() -> ReleaseStamp {
        ReleaseStamp::at(
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(12, 0, 0))
                .expect("valid date"),
        )
    }

    #[test]
    fn test_selection_from_args() {
        assert_eq!(
            PushSelection::from_args(None, true).expect("all"),
            PushSelection::All
        );
        assert_eq!(
            PushSelection::from_args(Some("v1"), true).expect("all wins"),
            PushSelection::All
        );
        assert_eq!(
            PushSelection::from_args(Some("v1"), false).expect("single"),
            PushSelection::Single("v1".to_string())
        );
        assert!(matches!(
            PushSelection::from_args(None, false),
            Err(RtagError::Cli(CliError::MissingPushTarget))
        ));
    }

    #[test]
    fn test_select_all_on_empty_store_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);

        assert!(matches!(
            select_tags(&config, &PushSelection::All),
            Err(RtagError::Cli(CliError::NoTagsFound))
        ));
    }

    #[test]
    fn test_select_single_requires_stored_tag() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        seed(&config, &["v1"]);

        let missing = select_tags(&config, &PushSelection::Single("missing-tag".to_string()));
        assert!(matches!(
            missing,
            Err(RtagError::Cli(CliError::TagNotInStore { ref tag })) if tag == "missing-tag"
        ));

        let found = select_tags(&config, &PushSelection::Single("v1".to_string()))
            .expect("select");
        assert_eq!(found, vec!["v1"]);
    }

    #[test]
    fn test_select_single_empty_is_not_in_store() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        seed(&config, &["v1"]);

        assert!(matches!(
            select_tags(&config, &PushSelection::Single(String::new())),
            Err(RtagError::Cli(CliError::TagNotInStore { .. }))
        ));
    }

    #[tokio::test]
    async fn test_push_all_creates_each_tag_then_pushes_once() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        seed(&config, &["v1", "v2"]);
        let git = RecordingGit::default();

        let tags = select_tags(&config, &PushSelection::All).expect("select");
        let report = push_tags(&config, &git, &tags, noon()).await;

        assert_eq!(
            git.calls(),
            vec![
                "tag release-202401011200-v1",
                "tag release-202401011200-v2",
                "push origin --tags",
            ]
        );
        assert!(report.pushed());
        assert!(report.failed_tags().is_empty());
        assert_eq!(report.stamp.timestamp(), "202401011200");
    }

    #[tokio::test]
    async fn test_failed_creation_does_not_stop_remaining_tags() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        seed(&config, &["v1", "v2"]);
        let git = RecordingGit {
            failing_tags: HashSet::from(["release-202401011200-v1".to_string()]),
            ..RecordingGit::default()
        };

        let tags = select_tags(&config, &PushSelection::All).expect("select");
        let report = push_tags(&config, &git, &tags, noon()).await;

        assert_eq!(git.calls().len(), 3);
        assert_eq!(git.calls()[1], "tag release-202401011200-v2");
        assert_eq!(report.failed_tags(), vec!["release-202401011200-v1"]);
        assert!(report.outcomes[1].is_created());
        assert!(report.pushed());
    }

    #[tokio::test]
    async fn test_push_failure_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        seed(&config, &["v1"]);
        let git = RecordingGit {
            fail_push: true,
            ..RecordingGit::default()
        };

        let tags = select_tags(&config, &PushSelection::All).expect("select");
        let report = push_tags(&config, &git, &tags, noon()).await;

        assert!(!report.pushed());
        assert_eq!(report.outcomes.len(), 1);
        assert!(report.outcomes[0].is_created());
    }

    #[tokio::test]
    async fn test_same_minute_pushes_derive_identical_names() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = runtime(&temp_dir);
        seed(&config, &["v1"]);
        let git = RecordingGit::default();
        let tags = select_tags(&config, &PushSelection::All).expect("select");

        let first = push_tags(&config, &git, &tags, noon()).await;
        let second = push_tags(&config, &git, &tags, noon()).await;

        assert_eq!(first.outcomes[0].git_tag, second.outcomes[0].git_tag);
    }
}
