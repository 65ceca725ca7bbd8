//! Push command implementation.

use crate::error::Result;
use crate::git::GitCli;
use crate::runtime::RuntimeConfig;
use crate::stamp::ReleaseStamp;
use crate::workflow::{self, PushSelection};

use super::helpers::print_recovery_suggestions;

/// Execute push command.
///
/// The selection is checked against the store before git is looked up, so a
/// missing tag never reaches git.
pub(super) async fn execute_push(
    config: &RuntimeConfig,
    tag: Option<&str>,
    all: bool,
) -> Result<i32> {
    let selection = PushSelection::from_args(tag, all)?;
    let tags = workflow::select_tags(config, &selection)?;
    let git = GitCli::discover()?;

    let report = workflow::push_tags(config, &git, &tags, ReleaseStamp::now()).await;

    let failed = report.failed_tags();
    if !failed.is_empty() {
        log::warn!("{} release tag(s) were not created: {:?}", failed.len(), failed);
    }

    match &report.push_error {
        None => Ok(0),
        Some(e) => {
            print_recovery_suggestions(config, e);
            Ok(1)
        }
    }
}
