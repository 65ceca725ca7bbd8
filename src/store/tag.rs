//! Release tag names as stored in the tag file.

use crate::error::StoreError;
use serde::Serialize;
use std::fmt;

/// A non-empty, single-line tag name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Create a tag, trimming surrounding whitespace.
    ///
    /// Fails when the trimmed value is empty or spans several lines, since
    /// either would not survive a round trip through the line-oriented store.
    pub fn new(value: impl AsRef<str>) -> Result<Self, StoreError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyTag);
        }
        if trimmed.contains(['\n', '\r']) {
            return Err(StoreError::InvalidTag {
                tag: trimmed.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Tag name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the tag and return the owned name
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
