//! Decoder trait

use crate::error::Result;
use crate::types::Item;

/// Decodes a response body into collection items
pub trait RecordDecoder: Send + Sync {
    /// Decode a body into items, preserving server order.
    ///
    /// A body that does not have the expected shape is an `Error::Decode`.
    fn decode(&self, body: &str) -> Result<Vec<Item>>;
}
