//! List command implementation.

use crate::error::Result;
use crate::runtime::RuntimeConfig;
use crate::workflow;

/// Execute list command
pub(super) fn execute_list(config: &RuntimeConfig, json: bool) -> Result<i32> {
    let tags = workflow::list_tags(config)?;

    if json {
        config.println(&serde_json::to_string(&tags)?);
    } else if tags.is_empty() {
        config.info_println(config.messages().no_tags_found);
    } else {
        workflow::print_tags(config, config.messages().all_tags, &tags);
    }

    Ok(0)
}
