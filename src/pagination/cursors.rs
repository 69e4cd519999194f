//! Page cursor cache
//!
//! Maps navigation tokens to the URLs advertised by the most recent response.

use super::types::{normalize_rel, RelationMap};
use std::collections::HashMap;
use tracing::debug;

/// Navigation token → request URL, always a full snapshot of one response.
///
/// Relations describe navigation relative to the page they came with, so
/// there is deliberately no way to merge two sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursorStore {
    cursors: HashMap<String, String>,
}

impl PageCursorStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every cursor and install the relations of a new response
    pub fn replace(&mut self, relations: &RelationMap) {
        self.cursors = relations
            .iter()
            .map(|r| (r.rel.clone(), r.href.clone()))
            .collect();
        debug!(
            "Cursor store replaced: [{}]",
            relations.names().collect::<Vec<_>>().join(", ")
        );
    }

    /// URL for a navigation token, if that direction is available
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.cursors.get(&normalize_rel(token)).map(String::as_str)
    }

    /// Whether a navigation token currently resolves
    pub fn has_direction(&self, token: &str) -> bool {
        self.cursors.contains_key(&normalize_rel(token))
    }

    /// Forget every cursor
    pub fn clear(&mut self) {
        self.cursors.clear();
    }

    /// Whether no cursors are stored (client has not fetched yet, or the last
    /// response carried no pagination)
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Number of stored cursors
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Stored tokens, sorted
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.cursors.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }
}
