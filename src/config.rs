//! Client configuration
//!
//! Where the collection lives and how to reach it. Loaded from YAML (or
//! JSON, which is valid YAML) or built from defaults that point at the GitHub
//! users API.

use crate::decode::JsonDecoder;
use crate::error::{Error, Result};
use crate::fetcher::DEFAULT_LINK_HEADER;
use crate::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Placeholder for the sub-resource id in `sub_resource_path`
pub const ID_PLACEHOLDER: &str = "{id}";

/// Placeholder for the collection resource name in `sub_resource_path`
pub const RESOURCE_PLACEHOLDER: &str = "{resource}";

/// Configuration of a paginated collection client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base API URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Path of the paginated collection, may carry a query string
    #[serde(default = "default_collection_path")]
    pub collection_path: String,

    /// Path template of the per-item sub-resource
    #[serde(default = "default_sub_resource_path")]
    pub sub_resource_path: String,

    /// Response header carrying pagination relations
    #[serde(default = "default_link_header")]
    pub link_header: String,

    /// Dotted path to the item array when bodies are wrapped in an envelope
    #[serde(default)]
    pub records_path: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_collection_path() -> String {
    "/users".to_string()
}

fn default_sub_resource_path() -> String {
    "/{resource}/{id}/followers".to_string()
}

fn default_link_header() -> String {
    DEFAULT_LINK_HEADER.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("pagelink/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            collection_path: default_collection_path(),
            sub_resource_path: default_sub_resource_path(),
            link_header: default_link_header(),
            records_path: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Defaults with a different API URL
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Load and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate a YAML (or JSON) document
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every URL can be built
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.api_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::invalid_value("api_url", "must be a hierarchical URL"));
        }
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::invalid_value("api_url", "scheme must be http or https"));
        }
        if !self.sub_resource_path.contains(ID_PLACEHOLDER) {
            return Err(Error::invalid_value(
                "sub_resource_path",
                format!("must contain the {ID_PLACEHOLDER} placeholder"),
            ));
        }
        if self.link_header.trim().is_empty() {
            return Err(Error::invalid_value("link_header", "must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        Ok(())
    }

    /// URL of the first page when no cursor state exists
    pub fn bootstrap_url(&self) -> Result<String> {
        let (path, query) = match self.collection_path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (self.collection_path.as_str(), None),
        };

        let mut url = self.join_segments(path.split('/').map(ToString::to_string))?;
        url.set_query(query);
        Ok(url.into())
    }

    /// URL of the sub-resource for one item.
    ///
    /// The id always lands in a single path segment, so characters such as
    /// `/` are percent-encoded rather than changing the path.
    pub fn sub_resource_url(&self, id: &str) -> Result<String> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::InvalidId { id: id.to_string() });
        }

        let resource = self.resource_name();
        let segments = self.sub_resource_path.split('/').map(|segment| {
            segment
                .replace(RESOURCE_PLACEHOLDER, &resource)
                .replace(ID_PLACEHOLDER, id)
        });

        Ok(self.join_segments(segments)?.into())
    }

    /// Last path segment of the collection path (`users` for `/users`)
    pub fn resource_name(&self) -> String {
        let path = self
            .collection_path
            .split('?')
            .next()
            .unwrap_or_default();
        path.rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string()
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(&self.user_agent);
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        builder.build()
    }

    /// Body decoder derived from this config
    pub fn decoder(&self) -> JsonDecoder {
        match &self.records_path {
            Some(path) => JsonDecoder::with_path(path),
            None => JsonDecoder::new(),
        }
    }

    fn join_segments(&self, segments: impl Iterator<Item = String>) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::invalid_value("api_url", "must be a hierarchical URL"))?;
            path.pop_if_empty();
            for segment in segments.filter(|s| !s.is_empty()) {
                path.push(&segment);
            }
        }
        Ok(url)
    }
}
