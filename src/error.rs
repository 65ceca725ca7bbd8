//! Error types for rtag operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for rtag operations
pub type Result<T> = std::result::Result<T, RtagError>;

/// Main error type for all rtag operations
#[derive(Error, Debug)]
pub enum RtagError {
    /// Tag store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Git subprocess errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// CLI usage errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Language preference errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tag store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Tag is already present in the store
    #[error("tag '{tag}' already exists")]
    Duplicate {
        /// Tag name
        tag: String,
    },

    /// Tag is not present in the store
    #[error("tag '{tag}' does not exist")]
    NotFound {
        /// Tag name
        tag: String,
    },

    /// Tag is empty after trimming
    #[error("tag cannot be empty")]
    EmptyTag,

    /// Tag contains a line break
    #[error("tag '{tag}' must not contain line breaks")]
    InvalidTag {
        /// Offending value
        tag: String,
    },

    /// Reading the store file failed
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        /// Store path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Writing the store file failed
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        /// Store path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Acquiring the store lock failed
    #[error("failed to lock {path}: {reason}")]
    LockFailed {
        /// Lock file path
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },
}

/// Git subprocess errors
#[derive(Error, Debug)]
pub enum GitError {
    /// No git executable on PATH
    #[error("git executable not found on PATH")]
    NotInstalled,

    /// The git process could not be started
    #[error("failed to run '{command}': {source}")]
    SpawnFailed {
        /// Command line that failed
        command: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// `git tag` exited unsuccessfully
    #[error("git tag {tag} exited with {status}")]
    TagCreationFailed {
        /// Git tag name
        tag: String,
        /// Exit status of the git process
        status: ExitStatus,
    },

    /// `git push` exited unsuccessfully
    #[error("git push {remote} --tags exited with {status}")]
    PushFailed {
        /// Remote name
        remote: String,
        /// Exit status of the git process
        status: ExitStatus,
    },
}

/// CLI usage errors
#[derive(Error, Debug)]
pub enum CliError {
    /// `push` without a tag and without `--all`
    #[error("specify a tag to push or use --all")]
    MissingPushTarget,

    /// The store has no tags to operate on
    #[error("no tags found")]
    NoTagsFound,

    /// The push target was never added to the store
    #[error("tag '{tag}' does not exist in the tag store")]
    TagNotInStore {
        /// Tag name
        tag: String,
    },

    /// `lang` was given an unknown language
    #[error("unsupported language '{value}'")]
    UnsupportedLanguage {
        /// Value given on the command line
        value: String,
    },

    /// Reading interactive input failed
    #[error("failed to read input: {source}")]
    InputFailed {
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Language preference errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The platform has no config directory
    #[error("unable to determine config directory")]
    NoConfigDir,

    /// Writing the preference file failed
    #[error("failed to save language preference to {path}: {source}")]
    SaveFailed {
        /// Preference file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl RtagError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            RtagError::Git(GitError::NotInstalled) => vec![
                "Install git and make sure it is on PATH".to_string(),
                "Verify with: git --version".to_string(),
            ],
            RtagError::Git(GitError::PushFailed { remote, .. }) => vec![
                format!("Verify the '{}' remote: git remote -v", remote),
                "Check your credentials for the remote".to_string(),
                "Tags created locally are kept; rerun: git push origin --tags".to_string(),
            ],
            RtagError::Store(StoreError::LockFailed { path, .. }) => vec![format!(
                "Another rtag process holds {}; retry once it finishes",
                path.display()
            )],
            RtagError::Config(ConfigError::NoConfigDir) => {
                vec!["Set RTAG_LANG to choose a language for this session".to_string()]
            }
            _ => Vec::new(),
        }
    }
}
