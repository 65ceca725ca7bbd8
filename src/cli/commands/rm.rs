//! Rm command implementation.

use crate::error::Result;
use crate::runtime::RuntimeConfig;
use crate::workflow;

/// Execute rm command
pub(super) fn execute_rm(config: &RuntimeConfig, tag: &str) -> Result<i32> {
    workflow::remove_tag(config, tag)?;
    Ok(0)
}
