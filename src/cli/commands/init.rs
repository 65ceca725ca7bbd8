//! Init command implementation.

use crate::error::Result;
use crate::runtime::RuntimeConfig;
use crate::workflow;
use std::io;

/// Execute init command
pub(super) fn execute_init(config: &RuntimeConfig) -> Result<i32> {
    let stdin = io::stdin();
    workflow::init(config, &mut stdin.lock())?;
    Ok(0)
}
