//! Elasticsearch-compatible HTTP search backend

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use rankcheck_core::config::BackendConfig;
use rankcheck_core::error::{Error, Result};

use crate::{SearchBackend, SearchRequest, SearchResponse};

/// Search backend speaking the `POST /{index}/_search` HTTP API
///
/// Performs no retries: failures propagate unmodified to the caller, which
/// records them per case and moves on.
pub struct HttpSearchBackend {
    client: Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl HttpSearchBackend {
    /// Build a backend from connection settings
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::backend(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            credentials: config.credentials()?,
        })
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some((username, password)) => request.basic_auth(username, Some(password)),
            None => request,
        }
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, index: &str, request: &SearchRequest) -> Result<SearchResponse> {
        let url = format!("{}/{index}/_search", self.base_url);
        debug!(index, size = request.size, "executing search");

        let response = self
            .authorized(self.client.post(&url))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let error_kind = if e.is_timeout() {
                    "timeout"
                } else if e.is_connect() {
                    "connection"
                } else {
                    "request"
                };
                Error::backend(format!("search against '{index}' failed ({error_kind}): {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error response".to_string());
            warn!(index, %status, "search returned an error status");
            return Err(Error::backend(format!(
                "search against '{index}' returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::backend(format!("failed to decode search response: {e}")))
    }

    async fn ping(&self) -> Result<()> {
        let response = self
            .authorized(self.client.get(&self.base_url))
            .send()
            .await
            .map_err(|e| Error::backend(format!("backend unreachable: {e}")))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::backend(format!(
                "backend ping returned {}",
                response.status()
            )))
        }
    }
}
