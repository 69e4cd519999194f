//! Response decoding module
//!
//! Turns a response body into the ordered item sequence of a collection.

mod decoders;
mod types;

pub use decoders::JsonDecoder;
pub use types::RecordDecoder;
