//! Add command implementation.

use crate::error::Result;
use crate::runtime::RuntimeConfig;
use crate::workflow;
use std::io;

/// Execute add command, interactively when no tag is given
pub(super) fn execute_add(config: &RuntimeConfig, tag: Option<&str>) -> Result<i32> {
    match tag {
        Some(tag) => {
            workflow::add_tag(config, tag)?;
        }
        None => {
            let stdin = io::stdin();
            let summary = workflow::interactive_add(config, &mut stdin.lock())?;
            log::debug!(
                "Interactive add finished: {} added, {} failed",
                summary.added.len(),
                summary.failed.len()
            );
        }
    }
    Ok(0)
}
