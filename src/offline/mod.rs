// ABOUTME: Offline response cache with network-first data and cache-first shell policies
// ABOUTME: Parameterized over a Fetcher (network) and a CacheStore (named caches)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Offline Cache
//!
//! Two policies decide how a GET is answered:
//!
//! - **Network first** for JSON documents under `data/` relative to the app
//!   scope: the fresh copy wins and is stored; when the network fails the
//!   cached copy is served, else a synthesized `{"error":"offline"}` body.
//! - **Cache first** for everything else: the cached copy wins; on a miss the
//!   network copy is stored and served; when both fail, navigation requests
//!   get the cached root document and the rest get a 503 "Offline".
//!
//! Non-GET methods and non-http(s) schemes are never intercepted.
//!
//! ```rust,no_run
//! use gymgo::offline::{http::HttpFetcher, memory::MemoryCacheStore, OfflineCache, Request};
//! use url::Url;
//! # async fn example() -> anyhow::Result<()> {
//! let scope = Url::parse("https://gym.example/app/")?;
//! let cache = OfflineCache::new(HttpFetcher::new(10)?, MemoryCacheStore::new(256), scope.clone());
//! cache.install().await?;
//! let served = cache.handle(&Request::get(scope.join("data/routine.json")?)).await?;
//! println!("{} from {:?}", served.response.status, served.source);
//! # Ok(())
//! # }
//! ```

/// Real network fetcher backed by `reqwest`
pub mod http;
/// In-memory LRU cache store
pub mod memory;

use crate::constants::cache::{
    DATA_PATH_PREFIX, DATA_PATH_SUFFIX, OFFLINE_DATA_BODY, OFFLINE_STATUS, OFFLINE_TEXT_BODY,
    ROOT_DOCUMENT, SHELL_ASSETS, SHELL_CACHE_NAME,
};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::future::try_join_all;
use reqwest::Method;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};
use url::Url;

/// Content type of synthesized JSON bodies
const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type of synthesized text bodies
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// An outgoing request as seen by the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: Url,
    /// Value of the `Accept` header
    pub accept: Option<String>,
}

impl Request {
    /// GET request without an `Accept` header
    #[must_use]
    pub const fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            accept: None,
        }
    }

    /// GET request for an HTML page
    #[must_use]
    pub fn navigate(url: Url) -> Self {
        Self::get(url).with_accept("text/html,application/xhtml+xml")
    }

    /// Set the `Accept` header
    #[must_use]
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Whether the request asks for an HTML document
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        self.accept
            .as_deref()
            .is_some_and(|accept| accept.contains("text/html"))
    }

    /// Key under which the response is cached
    #[must_use]
    pub fn cache_key(&self) -> String {
        self.url.as_str().to_owned()
    }
}

/// A stored or fetched response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    /// HTTP status code
    pub status: u16,
    /// Value of the `Content-Type` header
    pub content_type: Option<String>,
    /// Raw body
    pub body: Bytes,
}

impl CachedResponse {
    /// 200 response with the given content type
    #[must_use]
    pub fn ok(content_type: &str, body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.to_owned()),
            body: body.into(),
        }
    }

    /// Whether the status is 2xx
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Body decoded as UTF-8, replacing invalid sequences
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Whether this is the synthesized offline data document
    #[must_use]
    pub fn is_offline_marker(&self) -> bool {
        self.body.as_ref() == OFFLINE_DATA_BODY.as_bytes()
    }

    fn offline_data() -> Self {
        Self::ok(JSON_CONTENT_TYPE, OFFLINE_DATA_BODY)
    }

    fn offline_text() -> Self {
        Self {
            status: OFFLINE_STATUS,
            content_type: Some(TEXT_CONTENT_TYPE.to_owned()),
            body: Bytes::from_static(OFFLINE_TEXT_BODY.as_bytes()),
        }
    }
}

/// Where a served response came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    /// Fresh network copy
    Network,
    /// Copy from the named cache
    Cache,
    /// Fallback built locally because neither network nor cache answered
    Synthesized,
}

/// A response together with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Served {
    /// The response
    pub response: CachedResponse,
    /// Where it came from
    pub source: ResponseSource,
}

impl Served {
    const fn new(response: CachedResponse, source: ResponseSource) -> Self {
        Self { response, source }
    }
}

/// Caching policy applied to an intercepted request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Network, then cache, then a synthesized offline document
    NetworkFirst,
    /// Cache, then network, then the root document or a 503
    CacheFirst,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkFirst => write!(f, "network-first"),
            Self::CacheFirst => write!(f, "cache-first"),
        }
    }
}

/// Network access
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Perform the request
    ///
    /// Non-2xx statuses are returned as responses; only transport failures
    /// are errors.
    async fn fetch(&self, request: &Request) -> AppResult<CachedResponse>;
}

/// Named response caches
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Store `response` under `key` in the cache named `cache`
    async fn put(&self, cache: &str, key: &str, response: CachedResponse) -> AppResult<()>;

    /// Look up `key` in the cache named `cache`
    async fn get(&self, cache: &str, key: &str) -> AppResult<Option<CachedResponse>>;

    /// Names of every cache holding at least one entry
    async fn cache_names(&self) -> AppResult<Vec<String>>;

    /// Drop a whole cache; returns whether anything was removed
    async fn delete_cache(&self, cache: &str) -> AppResult<bool>;
}

/// Offline cache engine
pub struct OfflineCache<F, C> {
    fetcher: F,
    store: C,
    scope: Url,
    cache_name: String,
}

impl<F: Fetcher, C: CacheStore> OfflineCache<F, C> {
    /// Create an engine for the app rooted at `scope`, using the versioned shell cache
    #[must_use]
    pub fn new(fetcher: F, store: C, scope: Url) -> Self {
        Self {
            fetcher,
            store,
            scope,
            cache_name: SHELL_CACHE_NAME.to_owned(),
        }
    }

    /// Use a different cache name
    #[must_use]
    pub fn with_cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self
    }

    /// Name of the cache this engine writes to
    #[must_use]
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// App scope URL
    #[must_use]
    pub const fn scope(&self) -> &Url {
        &self.scope
    }

    /// Underlying cache store
    #[must_use]
    pub const fn store(&self) -> &C {
        &self.store
    }

    /// Pre-cache every shell asset
    ///
    /// All assets are fetched before anything is stored; one failure
    /// (transport error or non-2xx status) aborts the install.
    ///
    /// # Errors
    ///
    /// Returns an error if any asset cannot be fetched or stored, or if the
    /// store evicted an asset before the install finished
    pub async fn install(&self) -> AppResult<usize> {
        let requests = SHELL_ASSETS
            .iter()
            .map(|asset| {
                self.scope
                    .join(asset)
                    .map(Request::get)
                    .map_err(|e| AppError::invalid_input(format!("Bad asset path {asset}: {e}")))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let responses = try_join_all(requests.iter().map(|request| async move {
            let response = self.fetcher.fetch(request).await?;
            if response.is_success() {
                Ok(response)
            } else {
                Err(AppError::external_service(
                    request.url.as_str(),
                    format!("install fetch returned {}", response.status),
                ))
            }
        }))
        .await?;

        for (request, response) in requests.iter().zip(responses) {
            self.store
                .put(&self.cache_name, &request.cache_key(), response)
                .await?;
        }

        // A store too small for the manifest evicts assets while installing
        for request in &requests {
            if self
                .store
                .get(&self.cache_name, &request.cache_key())
                .await?
                .is_none()
            {
                return Err(AppError::storage(format!(
                    "cache {} cannot hold all {} shell assets; {} was evicted",
                    self.cache_name,
                    requests.len(),
                    request.url
                )));
            }
        }

        info!(
            cache = %self.cache_name,
            assets = requests.len(),
            "Shell assets pre-cached"
        );
        Ok(requests.len())
    }

    /// Delete every cache except the current one; returns the deleted names
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot list or delete caches
    pub async fn activate(&self) -> AppResult<Vec<String>> {
        let mut deleted = Vec::new();
        for name in self.store.cache_names().await? {
            if name != self.cache_name && self.store.delete_cache(&name).await? {
                deleted.push(name);
            }
        }
        info!(cache = %self.cache_name, deleted = deleted.len(), "Cache activated");
        Ok(deleted)
    }

    /// Policy for `request`, or `None` when it is not intercepted
    #[must_use]
    pub fn classify(&self, request: &Request) -> Option<Policy> {
        if request.method != Method::GET || !matches!(request.url.scheme(), "http" | "https") {
            return None;
        }
        let path = self.scope_relative_path(&request.url);
        if path.starts_with(DATA_PATH_PREFIX) && path.ends_with(DATA_PATH_SUFFIX) {
            Some(Policy::NetworkFirst)
        } else {
            Some(Policy::CacheFirst)
        }
    }

    /// Answer `request` according to its policy
    ///
    /// Requests that are not intercepted go straight to the network.
    ///
    /// # Errors
    ///
    /// Returns an error only for a pass-through request whose fetch fails or
    /// when the cache store itself fails
    pub async fn handle(&self, request: &Request) -> AppResult<Served> {
        match self.classify(request) {
            Some(Policy::NetworkFirst) => self.network_first(request).await,
            Some(Policy::CacheFirst) => self.cache_first(request).await,
            None => {
                debug!(url = %request.url, method = %request.method, "Not intercepted");
                let response = self.fetcher.fetch(request).await?;
                Ok(Served::new(response, ResponseSource::Network))
            }
        }
    }

    async fn network_first(&self, request: &Request) -> AppResult<Served> {
        let key = request.cache_key();
        match self.fetcher.fetch(request).await {
            Ok(fresh) => {
                self.remember(&key, &fresh).await;
                Ok(Served::new(fresh, ResponseSource::Network))
            }
            Err(error) => {
                warn!(url = %request.url, %error, "Network failed, trying cache");
                Ok(match self.store.get(&self.cache_name, &key).await? {
                    Some(cached) => Served::new(cached, ResponseSource::Cache),
                    None => Served::new(
                        CachedResponse::offline_data(),
                        ResponseSource::Synthesized,
                    ),
                })
            }
        }
    }

    async fn cache_first(&self, request: &Request) -> AppResult<Served> {
        let key = request.cache_key();
        if let Some(cached) = self.store.get(&self.cache_name, &key).await? {
            return Ok(Served::new(cached, ResponseSource::Cache));
        }

        match self.fetcher.fetch(request).await {
            Ok(fresh) => {
                self.remember(&key, &fresh).await;
                Ok(Served::new(fresh, ResponseSource::Network))
            }
            Err(error) => {
                warn!(url = %request.url, %error, "Offline with no cached copy");
                if request.is_navigation() {
                    if let Some(root) = self.cached_root_document().await? {
                        return Ok(Served::new(root, ResponseSource::Cache));
                    }
                }
                Ok(Served::new(
                    CachedResponse::offline_text(),
                    ResponseSource::Synthesized,
                ))
            }
        }
    }

    /// Store a successful fresh copy; a failed write still serves the response
    async fn remember(&self, key: &str, fresh: &CachedResponse) {
        if !fresh.is_success() {
            return;
        }
        if let Err(error) = self.store.put(&self.cache_name, key, fresh.clone()).await {
            warn!(key, %error, "Could not store fresh copy");
        }
    }

    async fn cached_root_document(&self) -> AppResult<Option<CachedResponse>> {
        let Ok(root) = self.scope.join(ROOT_DOCUMENT) else {
            return Ok(None);
        };
        self.store.get(&self.cache_name, root.as_str()).await
    }

    fn scope_relative_path<'a>(&self, url: &'a Url) -> &'a str {
        let path = url.path();
        if url.origin() == self.scope.origin() {
            if let Some(relative) = path.strip_prefix(self.scope.path()) {
                return relative;
            }
        }
        path.trim_start_matches('/')
    }
}
