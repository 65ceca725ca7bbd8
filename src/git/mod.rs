//! Git integration for the push workflow.
//!
//! The push workflow needs two capabilities: creating a local tag and
//! pushing all tags to a remote. [`GitCli`] implements both with the `git`
//! executable.

mod command;
mod operations;

pub use command::GitCli;
pub use operations::{DEFAULT_REMOTE, Pusher, TagCreator};
