//! Link relation types
//!
//! A parsed `Link` header becomes a [`RelationMap`]: one [`LinkRelation`] per
//! relation name.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// A single navigation pointer from a `Link` header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRelation {
    /// Target URL
    pub href: String,
    /// Relation name (e.g. "next")
    pub rel: String,
    /// Every other parameter of the link (e.g. "type", "title")
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl LinkRelation {
    /// Create a relation with no extra attributes
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute.
    ///
    /// `rel` is not an attribute; passing it here replaces the relation name.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        if name == "rel" {
            self.rel = value.into();
        } else {
            self.attributes.insert(name, value.into());
        }
        self
    }

    /// Look up an attribute by (case-insensitive) name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Whether this relation can be indexed
    pub fn is_valid(&self) -> bool {
        !self.href.is_empty() && !self.rel.is_empty()
    }
}

impl fmt::Display for LinkRelation {
    /// Formats as one `Link` header entry: `<href>; rel="rel"; name="value"`.
    ///
    /// A quoted value has no escape syntax, so attributes whose value
    /// contains `"` are left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>; rel=\"{}\"", self.href, self.rel)?;
        for (name, value) in self.attributes.iter().filter(|(_, v)| !v.contains('"')) {
            write!(f, "; {}=\"{}\"", name, value)?;
        }
        Ok(())
    }
}

/// Canonical form of a relation name: lowercase, with `previous` folded
/// into `prev`
pub fn normalize_rel(rel: &str) -> String {
    let rel = rel.trim().to_ascii_lowercase();
    if rel == "previous" {
        "prev".to_string()
    } else {
        rel
    }
}

/// Relation name → relation.
///
/// A missing key means that direction is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationMap {
    relations: BTreeMap<String, LinkRelation>,
}

impl RelationMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a relation under its normalized `rel`, replacing any earlier
    /// one.
    ///
    /// Relations without an href or rel are dropped; returns whether the
    /// relation was stored.
    pub fn insert(&mut self, mut relation: LinkRelation) -> bool {
        if !relation.is_valid() {
            return false;
        }
        relation.rel = normalize_rel(&relation.rel);
        self.relations.insert(relation.rel.clone(), relation);
        true
    }

    /// Get the relation for a name (`Next`, `previous` and `prev` all work)
    pub fn get(&self, rel: &str) -> Option<&LinkRelation> {
        self.relations.get(&normalize_rel(rel))
    }

    /// Get the target URL for a name
    pub fn href(&self, rel: &str) -> Option<&str> {
        self.get(rel).map(|r| r.href.as_str())
    }

    /// Whether a relation with this name exists
    pub fn contains(&self, rel: &str) -> bool {
        self.relations.contains_key(&normalize_rel(rel))
    }

    /// Number of relations
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Whether there are no relations
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Relation names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.relations.keys().map(String::as_str)
    }

    /// Iterate relations sorted by name
    pub fn iter(&self) -> btree_map::Values<'_, String, LinkRelation> {
        self.relations.values()
    }
}

impl FromIterator<LinkRelation> for RelationMap {
    fn from_iter<I: IntoIterator<Item = LinkRelation>>(iter: I) -> Self {
        let mut map = RelationMap::new();
        for relation in iter {
            map.insert(relation);
        }
        map
    }
}

impl<'a> IntoIterator for &'a RelationMap {
    type Item = &'a LinkRelation;
    type IntoIter = btree_map::Values<'a, String, LinkRelation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
