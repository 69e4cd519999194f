//! CLI commands and argument parsing

use crate::types::PageToken;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginated collection client
#[derive(Parser, Debug)]
#[command(name = "pagelink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the base API URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the first page, then follow one relation from it
    Page {
        /// Relation to follow after the first page (first, prev, next, last, ...)
        #[arg(default_value = "first")]
        token: String,
    },

    /// Load the followers (sub-resource) of one item
    Followers {
        /// Item id, e.g. a user login
        id: String,
    },

    /// Parse a Link header value and print the relation map
    Links {
        /// Raw header value
        header: String,
    },

    /// Interactive navigation: reads commands from stdin
    Browse,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Pretty-printed JSON
    Pretty,
}

/// One line of input in `browse` mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Load a page by token
    Page(PageToken),
    /// Load the sub-resource of an item
    Followers(String),
    /// Print the current navigation state
    Links,
    /// Forget navigation state
    Reset,
    /// Leave browse mode
    Quit,
}

impl BrowseCommand {
    /// Parse an input line; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = words.next()?;

        let parsed = match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => Self::Quit,
            "links" => Self::Links,
            "reset" => Self::Reset,
            "followers" | "f" => Self::Followers(words.next().unwrap_or_default().to_string()),
            _ => Self::Page(PageToken::from(command)),
        };
        Some(parsed)
    }
}
