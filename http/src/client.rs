//! Client configuration and query dispatch.

use std::time::Duration;

use grove_core::Query;
use reqwest::blocking;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;
use url::Url;

use crate::decoder;
use crate::error::HttpResult;

/// Endpoint configuration for a Grove server.
///
/// Every client owns its own configuration; there are no process-wide
/// defaults beyond `Default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server base URL, e.g. `http://bmeg.io`.
    pub host: String,
    /// Route accepting rendered queries.
    pub query_path: String,
    /// Route resolving a single vertex by gid.
    pub find_path: String,
    /// Request timeout. `None` leaves the transport's default in place.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:8000".to_string(),
            query_path: "/vertex/query".to_string(),
            find_path: "/vertex/find".to_string(),
            timeout: None,
        }
    }
}

/// Synchronous HTTP driver for a Grove graph server.
///
/// One POST per executed query; no retries, no interpretation of the
/// response beyond decoding. Timeout policy lives here, not in the query
/// model.
#[derive(Debug)]
pub struct Client {
    config: ClientConfig,
    base: Url,
    http: blocking::Client,
}

impl Client {
    /// Connect to a server base URL with default routes.
    pub fn connect(host: &str) -> HttpResult<Self> {
        Self::with_config(ClientConfig::new(host))
    }

    pub fn with_config(config: ClientConfig) -> HttpResult<Self> {
        let base = Url::parse(&config.host)?;
        let mut builder = blocking::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { config, base, http })
    }

    /// Entry point for composing a traversal against this server.
    pub fn query(&self) -> Query {
        Query::new()
    }

    /// Render the query and dispatch it in a single round trip.
    pub fn execute(&self, query: &Query) -> HttpResult<Vec<JsonValue>> {
        let payload = query.render()?;
        let url = self.query_url()?;
        debug!(%url, bytes = payload.len(), "dispatching query");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()?
            .error_for_status()?;

        let body = response.text()?;
        decoder::decode_body(&body)
    }

    /// Resolve a single vertex by gid.
    pub fn vertex(&self, gid: &str) -> HttpResult<JsonValue> {
        let url = self.find_url(gid)?;
        debug!(%url, "vertex lookup");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }

    fn query_url(&self) -> HttpResult<Url> {
        Ok(self.base.join(&self.config.query_path)?)
    }

    fn find_url(&self, gid: &str) -> HttpResult<Url> {
        Ok(self.base.join(&format!("{}/{}", self.config.find_path, gid))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes() {
        let config = ClientConfig::new("http://bmeg.io");
        assert_eq!(config.host, "http://bmeg.io");
        assert_eq!(config.query_path, "/vertex/query");
        assert_eq!(config.find_path, "/vertex/find");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_endpoint_urls() {
        let client = Client::connect("http://bmeg.io").unwrap();
        assert_eq!(
            client.query_url().unwrap().as_str(),
            "http://bmeg.io/vertex/query"
        );
        assert_eq!(
            client.find_url("gene:BRAF").unwrap().as_str(),
            "http://bmeg.io/vertex/find/gene:BRAF"
        );
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let err = Client::connect("not a url").unwrap_err();
        assert!(matches!(err, crate::error::HttpError::Config(_)));
    }
}
