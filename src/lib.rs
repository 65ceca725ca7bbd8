//! # rtag
//!
//! Release tag tracking with git integration.
//!
//! rtag keeps a list of release tag names in a plain text file (`.rtag` by
//! default, one tag per line) and turns them into timestamped git tags on
//! demand.
//!
//! ## Features
//!
//! - **Tag File**: Ordered, duplicate-free tags with locked atomic rewrites
//! - **Release Stamps**: `release-<YYYYMMDDHHMM>-<tag>` git tags
//! - **Git Integration**: `git tag` per release tag, then one `git push origin --tags`
//! - **Localized Output**: English, Chinese, French and Russian message tables
//!
//! ## Usage
//!
//! ```bash
//! rtag add web              # Track a tag
//! rtag list                 # Show tracked tags
//! rtag push --all           # Create release-<stamp>-<tag> for each and push
//! rtag lang fr              # Switch the interface language
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod i18n;
pub mod runtime;
pub mod stamp;
pub mod store;
pub mod workflow;

// Re-export main types for public API
pub use cli::Args;
pub use config::RtagConfig;
pub use error::{CliError, GitError, Result, RtagError, StoreError};
pub use git::{GitCli, Pusher, TagCreator};
pub use i18n::{Language, Messages};
pub use runtime::RuntimeConfig;
pub use stamp::ReleaseStamp;
pub use store::{Tag, TagStore};
pub use workflow::{PushReport, PushSelection};
