use crate::error::{FridgeError, Result};
use crate::types::AvoidIssue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static tag -> description glossary served as `data/tags.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagGlossary {
    entries: HashMap<String, String>,
}

impl TagGlossary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_entry(mut self, tag: impl Into<String>, description: impl Into<String>) -> Self {
        self.entries.insert(tag.into(), description.into());
        self
    }

    /// Exact-key lookup.
    pub fn lookup(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }

    /// Like [`lookup`](Self::lookup), but a miss is an error the caller can
    /// show or ignore. Misses are logged, never fatal.
    pub fn describe(&self, tag: &str) -> Result<&str> {
        self.lookup(tag).ok_or_else(|| {
            log::debug!("tag '{}' not found in glossary", tag);
            FridgeError::TagNotFound(tag.to_string())
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Additional tags worth showing next to `tag`: those that don't repeat it.
pub fn visible_additional_tags<'a>(tag: &str, additional: &'a [String]) -> Vec<&'a str> {
    additional
        .iter()
        .map(String::as_str)
        .filter(|t| !t.contains(tag))
        .collect()
}

/// Tags a reader can look up for an avoid issue: the primary tag first,
/// then the visible additional tags.
pub fn clickable_tags(issue: &AvoidIssue) -> Vec<&str> {
    let mut tags = vec![issue.rule.tag.as_str()];
    tags.extend(visible_additional_tags(
        &issue.rule.tag,
        &issue.rule.additional_tags,
    ));
    tags
}
