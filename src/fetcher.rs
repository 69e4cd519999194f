//! Collection fetcher
//!
//! One GET, one decoded page. The fetcher never touches cursor state; the
//! coordinator decides what to do with the relations it returns.

use crate::decode::{JsonDecoder, RecordDecoder};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::pagination::{parse_link_header, RelationMap};
use crate::types::Item;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default name of the header carrying pagination relations
pub const DEFAULT_LINK_HEADER: &str = "link";

/// One fetched page of a collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage {
    /// Items in server order
    pub items: Vec<Item>,
    /// Navigation relative to this page; empty when the response carried none
    pub cursors: RelationMap,
}

impl CollectionPage {
    /// Create a page
    pub fn new(items: Vec<Item>, cursors: RelationMap) -> Self {
        Self { items, cursors }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fetches and decodes collection pages over a [`Transport`]
pub struct CollectionFetcher<T> {
    transport: T,
    decoder: Box<dyn RecordDecoder>,
    link_header: String,
}

impl<T: Transport> CollectionFetcher<T> {
    /// Create a fetcher decoding bare JSON arrays and reading the `Link` header
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            decoder: Box::new(JsonDecoder::new()),
            link_header: DEFAULT_LINK_HEADER.to_string(),
        }
    }

    /// Use a different body decoder
    #[must_use]
    pub fn with_decoder(mut self, decoder: impl RecordDecoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// Read relations from a different header
    #[must_use]
    pub fn with_link_header(mut self, name: impl Into<String>) -> Self {
        self.link_header = name.into();
        self
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch a page: items plus the relations of its pagination header
    pub async fn fetch(&self, target: &str) -> Result<CollectionPage> {
        let response = self.transport.get(target).await?;

        if !response.is_success() {
            debug!("GET {} failed with {}", target, response.status);
            return Err(Error::http_status(response.status, response.body));
        }

        let items = self.decoder.decode(&response.body)?;
        let cursors = response
            .header(&self.link_header)
            .map(|value| parse_link_header(&value))
            .unwrap_or_default();

        debug!(
            "Fetched {} items from {} ({} relations)",
            items.len(),
            target,
            cursors.len()
        );
        Ok(CollectionPage { items, cursors })
    }

    /// Fetch a collection that does not paginate, dropping any relations
    pub async fn fetch_items(&self, target: &str) -> Result<Vec<Item>> {
        self.fetch(target).await.map(|page| page.items)
    }
}

impl<T> std::fmt::Debug for CollectionFetcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionFetcher")
            .field("link_header", &self.link_header)
            .finish_non_exhaustive()
    }
}
