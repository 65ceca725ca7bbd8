//! Git capability traits used by the push workflow.

use crate::error::Result;
use std::future::Future;

/// Remote that release tags are pushed to
pub const DEFAULT_REMOTE: &str = "origin";

/// Creates lightweight tags in the local repository
pub trait TagCreator {
    /// Create the local tag `name` on the current HEAD
    fn create_tag(&self, name: &str) -> impl Future<Output = Result<()>>;
}

/// Pushes local tags to a remote
pub trait Pusher {
    /// Push every local tag to `remote`
    fn push_tags(&self, remote: &str) -> impl Future<Output = Result<()>>;
}
