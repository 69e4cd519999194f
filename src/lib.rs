//! # pagelink
//!
//! A client for REST collections paginated with `Link` headers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagelink::{ClientConfig, FetchCoordinator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = FetchCoordinator::from_config(ClientConfig::default())?;
//!
//!     let page = client.load_page("first").await?;
//!     println!("{} users", page.items.len());
//!
//!     if client.navigation_available("next").await {
//!         let next = client.load_page("next").await?;
//!         println!("{} more", next.items.len());
//!     }
//!
//!     let followers = client.load_sub_resource("octocat").await?;
//!     println!("{} followers", followers.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                     FetchCoordinator                      │
//! │  load_page(token)   load_sub_resource(id)                 │
//! │  navigation_available(token)   current_page()             │
//! └───────────────────────────────────────────────────────────┘
//!          │                                   │
//! ┌────────┴──────────┐             ┌──────────┴──────────┐
//! │  PageCursorStore  │             │  CollectionFetcher  │
//! └───────────────────┘             └──────────┬──────────┘
//!          ▲                        ┌──────────┼──────────┐
//!          │                   Transport    Decoder   parse_link_header
//!          └──────────────── RelationMap ◄───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Link header parsing and page cursors
pub mod pagination;

/// Response body decoders
pub mod decode;

/// HTTP transport
pub mod http;

/// Single-request page fetching
pub mod fetcher;

/// Request sequencing and navigation state
pub mod coordinator;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use coordinator::FetchCoordinator;
pub use error::{Error, FetchError, Result};
pub use fetcher::{CollectionFetcher, CollectionPage};
pub use pagination::{parse_link_header, LinkRelation, PageCursorStore, RelationMap};
pub use types::{Item, PageToken};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
