//! Pagination module
//!
//! Link-header navigation: parsing relations out of a response and caching
//! them as page cursors.
//!
//! # Overview
//!
//! - [`parse_link_header`] turns a raw `Link` header into a [`RelationMap`]
//! - [`PageCursorStore`] keeps the relations of the latest page so that
//!   `first`/`prev`/`next`/`last` can be resolved to URLs

mod cursors;
mod parser;
mod types;

pub use cursors::PageCursorStore;
pub use parser::{parse_link_header, to_link_header};
pub use types::{normalize_rel, LinkRelation, RelationMap};
