// ABOUTME: reqwest-backed Fetcher for the offline cache
// ABOUTME: Transport failures become errors; non-2xx statuses come back as responses

use super::{CachedResponse, Fetcher, Request};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

/// Network fetcher with a request timeout
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests time out after `timeout_secs`
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized
    pub fn new(timeout_secs: u64) -> AppResult<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &Request) -> AppResult<CachedResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());
        if let Some(accept) = &request.accept {
            builder = builder.header(ACCEPT, accept);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?;

        debug!(url = %request.url, status, bytes = body.len(), "Fetched");
        Ok(CachedResponse {
            status,
            content_type,
            body,
        })
    }
}
