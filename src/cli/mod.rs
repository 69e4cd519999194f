//! CLI module
//!
//! Command-line interface over the fetch coordinator.
//!
//! # Commands
//!
//! - `page` - Load the first page, then optionally navigate to another one
//! - `followers` - Load the sub-resource of one item
//! - `links` - Parse a `Link` header value and print its relations
//! - `browse` - Navigate interactively, one command per stdin line

mod commands;
mod runner;

pub use commands::{BrowseCommand, Cli, Commands, OutputFormat};
pub use runner::Runner;
