//! Fetch coordinator
//!
//! Owns the navigation state of one client: the cursor store and the page
//! currently shown. Every mutation of that state goes through here.
//!
//! # Ordering
//!
//! Each `load_page` call takes a sequence number when it is issued. A result
//! is applied only if no later call has been issued in the meantime; late
//! responses of superseded calls come back as [`Error::Superseded`] and leave
//! the state alone. A superseded call that failed keeps its own error.
//! Superseded requests are not aborted.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::fetcher::{CollectionFetcher, CollectionPage};
use crate::http::{HttpClient, Transport};
use crate::pagination::PageCursorStore;
use crate::types::{Item, PageToken};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Navigation state shared by all calls
#[derive(Debug, Default)]
struct NavigationState {
    cursors: PageCursorStore,
    current: Option<CollectionPage>,
}

/// Sequences page loads and publishes their results
pub struct FetchCoordinator<T> {
    fetcher: CollectionFetcher<T>,
    config: ClientConfig,
    bootstrap_url: String,
    state: RwLock<NavigationState>,
    issued: AtomicU64,
}

impl FetchCoordinator<HttpClient> {
    /// Create a coordinator talking HTTP with settings from `config`
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let client = HttpClient::with_config(config.http_config())?;
        Self::new(config, client)
    }
}

impl<T: Transport> FetchCoordinator<T> {
    /// Create a coordinator over any transport
    pub fn new(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let bootstrap_url = config.bootstrap_url()?;
        let fetcher = CollectionFetcher::new(transport)
            .with_decoder(config.decoder())
            .with_link_header(config.link_header.clone());

        Ok(Self {
            fetcher,
            config,
            bootstrap_url,
            state: RwLock::new(NavigationState::default()),
            issued: AtomicU64::new(0),
        })
    }

    /// Load a page by navigation token.
    ///
    /// `first` resolves to the cached `first` relation, or to the bootstrap
    /// URL when there is none. Any other token must be in the cursor store,
    /// otherwise the call fails with `NoSuchPage` without touching the
    /// network.
    pub async fn load_page(&self, token: impl Into<PageToken>) -> Result<CollectionPage> {
        let token = token.into();

        let (seq, target) = {
            let state = self.state.read().await;
            let target = self.resolve_in(&state.cursors, &token)?;
            let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            (seq, target)
        };

        info!("Loading page '{}' (request #{}): {}", token, seq, target);
        let result = self.fetcher.fetch(&target).await;

        let mut state = self.state.write().await;
        let latest = self.issued.load(Ordering::SeqCst);
        if seq != latest {
            return match result {
                Ok(_) => {
                    warn!(
                        "Discarding result of request #{} ('{}'), request #{} is newer",
                        seq, token, latest
                    );
                    Err(Error::Superseded { seq })
                }
                Err(e) => {
                    warn!(
                        "Request #{} ('{}') failed after request #{} was issued: {}",
                        seq, token, latest, e
                    );
                    Err(e)
                }
            };
        }

        let page = result?;
        state.cursors.replace(&page.cursors);
        state.current = Some(page.clone());
        debug!(
            "Request #{} applied: {} items, directions [{}]",
            seq,
            page.len(),
            state.cursors.tokens().join(", ")
        );

        Ok(page)
    }

    /// Load a non-paginated child collection of one item.
    ///
    /// Never reads or writes the cursor store or the current page.
    pub async fn load_sub_resource(&self, id: &str) -> Result<Vec<Item>> {
        let target = self.config.sub_resource_url(id)?;
        info!("Loading sub-resource of '{}': {}", id, target);
        self.fetcher.fetch_items(&target).await
    }

    /// Whether a navigation token currently resolves to a URL
    pub async fn navigation_available(&self, token: impl Into<PageToken>) -> bool {
        let token = token.into();
        let state = self.state.read().await;
        self.resolve_in(&state.cursors, &token).is_ok()
    }

    /// URL a token would load right now
    pub async fn resolve(&self, token: impl Into<PageToken>) -> Result<String> {
        let token = token.into();
        let state = self.state.read().await;
        self.resolve_in(&state.cursors, &token)
    }

    /// Snapshot of the page currently shown
    pub async fn current_page(&self) -> Option<CollectionPage> {
        self.state.read().await.current.clone()
    }

    /// Snapshot of the cursor store
    pub async fn cursors(&self) -> PageCursorStore {
        self.state.read().await.cursors.clone()
    }

    /// Forget all navigation state.
    ///
    /// Counts as a new issuance, so results of calls still in flight are
    /// discarded.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        self.issued.fetch_add(1, Ordering::SeqCst);
        *state = NavigationState::default();
        debug!("Navigation state reset");
    }

    /// Number of `load_page` calls issued so far (resets included)
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// URL used for the first page
    pub fn bootstrap_url(&self) -> &str {
        &self.bootstrap_url
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        self.fetcher.transport()
    }

    fn resolve_in(&self, cursors: &PageCursorStore, token: &PageToken) -> Result<String> {
        if let Some(url) = cursors.resolve(token.as_str()) {
            return Ok(url.to_string());
        }
        if token.is_first() {
            return Ok(self.bootstrap_url.clone());
        }
        Err(Error::no_such_page(token.as_str()))
    }
}

impl<T> std::fmt::Debug for FetchCoordinator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchCoordinator")
            .field("bootstrap_url", &self.bootstrap_url)
            .field("issued", &self.issued.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
