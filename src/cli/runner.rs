//! CLI runner - executes commands

use crate::cli::commands::{BrowseCommand, Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::coordinator::FetchCoordinator;
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::parse_link_header;
use crate::types::PageToken;
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        // Unlocked handle: each `emit` takes the lock for its own write only
        let mut stdout = std::io::stdout();
        match &self.cli.command {
            Commands::Links { header } => {
                emit(&mut stdout, self.cli.format, &parse_link_header(header))
            }
            Commands::Page { token } => {
                let coordinator = FetchCoordinator::from_config(self.load_config()?)?;
                let token = PageToken::from(token.as_str());

                let mut page = coordinator.load_page(PageToken::First).await?;
                if !token.is_first() {
                    page = coordinator.load_page(token).await?;
                }
                emit(&mut stdout, self.cli.format, &page)
            }
            Commands::Followers { id } => {
                let coordinator = FetchCoordinator::from_config(self.load_config()?)?;
                let items = coordinator.load_sub_resource(id).await?;
                emit(&mut stdout, self.cli.format, &items)
            }
            Commands::Browse => {
                let coordinator = FetchCoordinator::from_config(self.load_config()?)?;
                let input = BufReader::new(tokio::io::stdin());
                browse(&coordinator, input, &mut stdout, self.cli.format).await
            }
        }
    }

    /// Build the client config from the config file and CLI overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(api_url) = &self.cli.api_url {
            config.api_url.clone_from(api_url);
        }

        config.validate()?;
        debug!("Using config: {:?}", config);
        Ok(config)
    }
}

/// Interactive navigation loop.
///
/// Each input line is one command; each result is written as one output
/// message. Failed commands are reported as `{"error": ...}` messages and the
/// loop continues.
pub async fn browse<T, R, W>(
    coordinator: &FetchCoordinator<T>,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let Some(command) = BrowseCommand::parse(&line) else {
            continue;
        };
        debug!("browse: {:?}", command);

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Reset => {
                coordinator.reset().await;
                emit(out, format, &navigation(coordinator).await)?;
            }
            BrowseCommand::Links => emit(out, format, &navigation(coordinator).await)?,
            BrowseCommand::Page(token) => match coordinator.load_page(token).await {
                Ok(page) => emit(out, format, &page)?,
                Err(e) => emit(out, format, &json!({ "error": e.to_string() }))?,
            },
            BrowseCommand::Followers(id) => match coordinator.load_sub_resource(&id).await {
                Ok(items) => emit(out, format, &json!({ "id": id, "followers": items }))?,
                Err(e) => emit(out, format, &json!({ "error": e.to_string() }))?,
            },
        }
    }

    Ok(())
}

/// Which directions are currently available
async fn navigation<T: Transport>(coordinator: &FetchCoordinator<T>) -> serde_json::Value {
    let mut available = serde_json::Map::new();
    for token in [
        PageToken::First,
        PageToken::Prev,
        PageToken::Next,
        PageToken::Last,
    ] {
        let enabled = coordinator.navigation_available(token.clone()).await;
        available.insert(token.to_string(), json!(enabled));
    }
    json!({ "navigation": available })
}

/// Write one output message
fn emit<W: Write, S: Serialize>(out: &mut W, format: OutputFormat, value: &S) -> Result<()> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    writeln!(out, "{text}")?;
    Ok(())
}
