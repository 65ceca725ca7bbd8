//! Release stamps: the timestamped git tag names created at push time.

use crate::store::Tag;
use chrono::{Local, NaiveDateTime};
use std::fmt;

/// `strftime` pattern for the minute-resolution stamp, e.g. `202401011200`
pub const STAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Prefix of every derived git tag
pub const RELEASE_TAG_PREFIX: &str = "release";

/// A push timestamp, captured once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseStamp {
    timestamp: String,
}

impl ReleaseStamp {
    /// Stamp for the current local time
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// Stamp for a fixed wall-clock time
    pub fn at(time: NaiveDateTime) -> Self {
        Self {
            timestamp: time.format(STAMP_FORMAT).to_string(),
        }
    }

    /// The `YYYYMMDDHHMM` timestamp
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Git tag name for `tag`: `release-<timestamp>-<tag>`
    pub fn git_tag_name(&self, tag: &Tag) -> String {
        format!("{}-{}-{}", RELEASE_TAG_PREFIX, self.timestamp, tag)
    }
}

impl fmt::Display for ReleaseStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.timestamp)
    }
}
