//! Common types used throughout pagelink

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A single record of a collection (a user, a follower, ...).
///
/// Items are passed through exactly as the server sent them.
pub type Item = JsonValue;

// ============================================================================
// Page Tokens
// ============================================================================

/// Symbolic name of a navigation direction.
///
/// The four well-known relations get their own variants; anything else the
/// server advertises is kept as a lowercase name, matching how relations
/// are indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PageToken {
    First,
    Prev,
    Next,
    Last,
    Named(String),
}

impl PageToken {
    /// Relation name this token is looked up under
    pub fn as_str(&self) -> &str {
        match self {
            PageToken::First => "first",
            PageToken::Prev => "prev",
            PageToken::Next => "next",
            PageToken::Last => "last",
            PageToken::Named(name) => name,
        }
    }

    /// Whether this is the `first` token
    pub fn is_first(&self) -> bool {
        matches!(self, PageToken::First)
    }
}

impl From<&str> for PageToken {
    fn from(value: &str) -> Self {
        let name = value.trim().to_ascii_lowercase();
        match name.as_str() {
            "first" => PageToken::First,
            "prev" | "previous" => PageToken::Prev,
            "next" => PageToken::Next,
            "last" => PageToken::Last,
            _ => PageToken::Named(name),
        }
    }
}

impl From<String> for PageToken {
    fn from(value: String) -> Self {
        PageToken::from(value.as_str())
    }
}

impl From<PageToken> for String {
    fn from(token: PageToken) -> Self {
        token.as_str().to_string()
    }
}

impl FromStr for PageToken {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PageToken::from(s))
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
