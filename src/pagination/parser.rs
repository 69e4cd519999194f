//! `Link` header parsing
//!
//! Grammar: comma-separated entries of the form
//! `<url>; name=value; name="quoted value"`. Commas and semicolons are only
//! separators outside of `<...>` and outside of quoted strings.
//!
//! Parsing is permissive: entries that cannot be understood are skipped and
//! never turn into an error.

use super::types::{LinkRelation, RelationMap};
use tracing::trace;

/// Parse a `Link` header value into a relation map.
///
/// Entries without a URL or without a `rel` parameter are discarded. When two
/// entries share a `rel`, the later one wins.
pub fn parse_link_header(header: &str) -> RelationMap {
    let mut relations = RelationMap::new();

    for entry in split_unquoted(header, ',') {
        match parse_entry(entry) {
            Some(relation) => {
                relations.insert(relation);
            }
            None => trace!("Skipping link entry: {:?}", entry.trim()),
        }
    }

    relations
}

/// Serialize a relation map back into a `Link` header value
pub fn to_link_header(relations: &RelationMap) -> String {
    relations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse one `<url>; params...` entry
fn parse_entry(entry: &str) -> Option<LinkRelation> {
    let entry = entry.trim();
    let rest = entry.strip_prefix('<')?;
    let close = rest.find('>')?;

    let href = rest[..close].trim();
    if href.is_empty() {
        return None;
    }

    let mut relation = LinkRelation::new(href, "");
    for param in split_unquoted(&rest[close + 1..], ';') {
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        relation = relation.with_attribute(name, unquote(value.trim()));
    }

    relation.is_valid().then_some(relation)
}

/// Split on `delimiter` wherever it is not inside `<...>` or a quoted string.
///
/// A quoted string always ends at the next `"`; backslashes are ordinary
/// characters.
fn split_unquoted(input: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_angle = false;
    let mut in_quotes = false;

    for (i, c) in input.char_indices() {
        if in_quotes {
            if c == '"' {
                in_quotes = false;
            }
            continue;
        }

        match c {
            '"' if !in_angle => in_quotes = true,
            '<' => in_angle = true,
            '>' => in_angle = false,
            c if c == delimiter && !in_angle => {
                parts.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);

    parts.retain(|p| !p.trim().is_empty());
    parts
}

/// Strip exactly one surrounding pair of double quotes.
///
/// Values that are not fully quoted pass through unchanged.
fn unquote(value: &str) -> String {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .to_string()
}
