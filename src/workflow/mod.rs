//! Tag workflows: store management, the interactive add loop and push.
//!
//! Workflows print their progress transcript through the [`RuntimeConfig`]
//! and return errors to the caller, which decides how to report them. Errors
//! that a workflow tolerates (a failed `git tag` during push, a duplicate in
//! the interactive loop) are printed where they happen.
//!
//! [`RuntimeConfig`]: crate::RuntimeConfig

mod interactive;
mod manage;
mod push;

pub use interactive::{InteractiveSummary, InitOutcome, init, interactive_add};
pub use manage::{add_tag, list_tags, print_tags, remove_tag};
pub use push::{PushReport, PushSelection, TagOutcome, push_tags, select_tags};
