//! Single-shot store operations behind `add <tag>`, `rm <tag>` and `list`.

use crate::error::Result;
use crate::runtime::RuntimeConfig;
use crate::store::Tag;

/// Validate and add one tag, printing the success line
pub fn add_tag(config: &RuntimeConfig, raw: &str) -> Result<Tag> {
    let tag = Tag::new(raw)?;
    config.store().add_tag(&tag)?;
    log::info!("Added tag '{}'", tag);
    config.success_println(&config.messages().add_tag_success(tag.as_str()));
    Ok(tag)
}

/// Remove one tag, printing the success line
pub fn remove_tag(config: &RuntimeConfig, raw: &str) -> Result<Tag> {
    let tag = Tag::new(raw)?;
    config.store().remove_tag(&tag)?;
    log::info!("Removed tag '{}'", tag);
    config.success_println(&config.messages().remove_tag_success(tag.as_str()));
    Ok(tag)
}

/// All stored tags in store order
pub fn list_tags(config: &RuntimeConfig) -> Result<Vec<Tag>> {
    config.store().read_tags()
}

/// Print `header` followed by one `  - <tag>` line per tag
pub fn print_tags(config: &RuntimeConfig, header: &str, tags: &[Tag]) {
    config.println(header);
    for tag in tags {
        config.indent(tag.as_str());
    }
}
