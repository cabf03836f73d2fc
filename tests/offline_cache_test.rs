// ABOUTME: Integration tests for the offline cache policies against a scripted network
// ABOUTME: Covers network-first data, cache-first shell assets, fallbacks, install and activate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use async_trait::async_trait;
use common::FakeNetwork;
use gymgo::constants::cache::{SHELL_ASSETS, SHELL_CACHE_NAME};
use gymgo::errors::{AppError, AppResult, ErrorCode};
use gymgo::offline::memory::MemoryCacheStore;
use gymgo::offline::{CacheStore, CachedResponse, OfflineCache, Policy, Request, ResponseSource};
use reqwest::Method;
use serde_json::json;
use url::Url;

const SCOPE: &str = "https://gym.example/app/";

fn url(path: &str) -> Url {
    Url::parse(SCOPE).unwrap().join(path).unwrap()
}

fn engine(network: &FakeNetwork) -> OfflineCache<FakeNetwork, MemoryCacheStore> {
    common::init_test_logging();
    OfflineCache::new(
        network.clone(),
        MemoryCacheStore::default(),
        Url::parse(SCOPE).unwrap(),
    )
}

#[test]
fn test_classify_requests() {
    let cache = engine(&FakeNetwork::new());

    let data = Request::get(url("data/routine.json?v=0.2.4"));
    assert_eq!(cache.classify(&data), Some(Policy::NetworkFirst));

    assert_eq!(
        cache.classify(&Request::get(url("js/app.js"))),
        Some(Policy::CacheFirst)
    );
    // Only JSON under data/ is network-first
    assert_eq!(
        cache.classify(&Request::get(url("data/readme.txt"))),
        Some(Policy::CacheFirst)
    );
    assert_eq!(
        cache.classify(&Request::get(url("css/data/theme.json"))),
        Some(Policy::CacheFirst)
    );

    let post = Request {
        method: Method::POST,
        ..Request::get(url("data/routine.json"))
    };
    assert_eq!(cache.classify(&post), None);

    let file = Request::get(Url::parse("file:///app/data/routine.json").unwrap());
    assert_eq!(cache.classify(&file), None);
}

#[tokio::test]
async fn test_network_first_prefers_fresh_copy() -> Result<()> {
    let network = FakeNetwork::new();
    network.route_json("/app/data/routine.json", &json!({"program": {"weeks": 8}}));
    let cache = engine(&network);
    let request = Request::get(url("data/routine.json"));

    let served = cache.handle(&request).await?;
    assert_eq!(served.source, ResponseSource::Network);

    // The fresh copy replaces the stored one
    network.route_json("/app/data/routine.json", &json!({"program": {"weeks": 10}}));
    let served = cache.handle(&request).await?;
    assert_eq!(served.source, ResponseSource::Network);
    assert!(served.response.text().contains("10"));

    network.set_offline(true);
    let served = cache.handle(&request).await?;
    assert_eq!(served.source, ResponseSource::Cache);
    assert!(served.response.text().contains("10"));
    Ok(())
}

#[tokio::test]
async fn test_network_first_synthesizes_offline_document() -> Result<()> {
    let network = FakeNetwork::new();
    network.set_offline(true);
    let cache = engine(&network);

    let served = cache
        .handle(&Request::get(url("data/techniques.json")))
        .await?;
    assert_eq!(served.source, ResponseSource::Synthesized);
    assert_eq!(served.response.status, 200);
    assert_eq!(served.response.text(), r#"{"error":"offline"}"#);
    assert!(served.response.is_offline_marker());
    assert_eq!(
        served.response.content_type.as_deref(),
        Some("application/json")
    );
    Ok(())
}

#[tokio::test]
async fn test_error_statuses_are_served_but_not_stored() -> Result<()> {
    let network = FakeNetwork::new();
    network.route_status("/app/data/routine.json", 500);
    let cache = engine(&network);
    let request = Request::get(url("data/routine.json"));

    let served = cache.handle(&request).await?;
    assert_eq!(served.source, ResponseSource::Network);
    assert_eq!(served.response.status, 500);
    assert!(cache.store().is_empty().await);

    network.set_offline(true);
    let served = cache.handle(&request).await?;
    assert_eq!(served.source, ResponseSource::Synthesized);
    Ok(())
}

#[tokio::test]
async fn test_cache_first_skips_network_once_stored() -> Result<()> {
    let network = FakeNetwork::new();
    let cache = engine(&network);
    let request = Request::get(url("css/styles.css"));

    let first = cache.handle(&request).await?;
    assert_eq!(first.source, ResponseSource::Network);
    assert_eq!(network.fetch_count(), 1);

    let second = cache.handle(&request).await?;
    assert_eq!(second.source, ResponseSource::Cache);
    assert_eq!(second.response, first.response);
    assert_eq!(network.fetch_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_cache_first_offline_fallbacks() -> Result<()> {
    let network = FakeNetwork::new();
    network.route(
        "/app/index.html",
        CachedResponse::ok("text/html", "<html>gymgo</html>"),
    );
    let cache = engine(&network);
    cache.install().await?;
    network.set_offline(true);

    // Navigation to an uncached page gets the shell document
    let served = cache.handle(&Request::navigate(url("progress"))).await?;
    assert_eq!(served.source, ResponseSource::Cache);
    assert_eq!(served.response.text(), "<html>gymgo</html>");

    // Any other miss is an explicit failure
    let served = cache.handle(&Request::get(url("img/missing.png"))).await?;
    assert_eq!(served.source, ResponseSource::Synthesized);
    assert_eq!(served.response.status, 503);
    assert_eq!(served.response.text(), "Offline");
    Ok(())
}

#[tokio::test]
async fn test_navigation_without_shell_is_503() -> Result<()> {
    let network = FakeNetwork::new();
    network.set_offline(true);
    let cache = engine(&network);

    let served = cache.handle(&Request::navigate(url(""))).await?;
    assert_eq!(served.response.status, 503);
    Ok(())
}

#[tokio::test]
async fn test_install_precaches_every_shell_asset() -> Result<()> {
    let network = FakeNetwork::new();
    let cache = engine(&network);

    let installed = cache.install().await?;
    assert_eq!(installed, SHELL_ASSETS.len());
    assert_eq!(cache.store().len().await, SHELL_ASSETS.len());
    assert_eq!(cache.cache_name(), SHELL_CACHE_NAME);

    // Installed assets are served offline
    network.set_offline(true);
    let served = cache.handle(&Request::get(url("js/app.js"))).await?;
    assert_eq!(served.source, ResponseSource::Cache);
    Ok(())
}

#[tokio::test]
async fn test_install_is_all_or_nothing() -> Result<()> {
    let network = FakeNetwork::new();
    network.route_status("/app/icons/icon-512.png", 404);
    let cache = engine(&network);

    assert!(cache.install().await.is_err());
    assert!(cache.store().is_empty().await);

    network.set_offline(true);
    assert!(cache.install().await.is_err());
    assert!(cache.store().is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_install_fails_when_store_cannot_hold_shell() -> Result<()> {
    let network = FakeNetwork::new();
    let cache = OfflineCache::new(
        network.clone(),
        MemoryCacheStore::new(4),
        Url::parse(SCOPE)?,
    );

    let error = cache.install().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
    Ok(())
}

#[tokio::test]
async fn test_each_cache_gets_full_capacity() -> Result<()> {
    let network = FakeNetwork::new();
    let store = MemoryCacheStore::new(SHELL_ASSETS.len());
    let old = OfflineCache::new(network.clone(), store.clone(), Url::parse(SCOPE)?)
        .with_cache_name("gymgo-shell-v0.1.0");
    old.install().await?;
    let current = OfflineCache::new(network.clone(), store.clone(), Url::parse(SCOPE)?);
    current.install().await?;
    assert_eq!(store.len().await, 2 * SHELL_ASSETS.len());

    network.set_offline(true);
    let served = current.handle(&Request::get(url("js/app.js"))).await?;
    assert_eq!(served.source, ResponseSource::Cache);
    let shell = current.handle(&Request::navigate(url(""))).await?;
    assert_eq!(shell.source, ResponseSource::Cache);
    Ok(())
}

/// Store whose writes always fail
struct ReadOnlyStore;

#[async_trait]
impl CacheStore for ReadOnlyStore {
    async fn put(&self, _cache: &str, _key: &str, _response: CachedResponse) -> AppResult<()> {
        Err(AppError::storage("quota exceeded"))
    }

    async fn get(&self, _cache: &str, _key: &str) -> AppResult<Option<CachedResponse>> {
        Ok(None)
    }

    async fn cache_names(&self) -> AppResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn delete_cache(&self, _cache: &str) -> AppResult<bool> {
        Ok(false)
    }
}

#[tokio::test]
async fn test_failed_cache_write_still_serves_fresh_copy() -> Result<()> {
    common::init_test_logging();
    let network = FakeNetwork::new();
    network.route_json("/app/data/routine.json", &json!({"days": []}));
    let cache = OfflineCache::new(network.clone(), ReadOnlyStore, Url::parse(SCOPE)?);

    let data = cache
        .handle(&Request::get(url("data/routine.json")))
        .await?;
    assert_eq!(data.source, ResponseSource::Network);
    assert_eq!(data.response.status, 200);

    let asset = cache.handle(&Request::get(url("js/app.js"))).await?;
    assert_eq!(asset.source, ResponseSource::Network);
    assert_eq!(asset.response.text(), "asset /app/js/app.js");
    Ok(())
}

#[tokio::test]
async fn test_activate_drops_other_caches() -> Result<()> {
    let network = FakeNetwork::new();
    let store = MemoryCacheStore::default();
    let old = OfflineCache::new(network.clone(), store.clone(), Url::parse(SCOPE)?)
        .with_cache_name("gymgo-shell-v0.1.0");
    old.install().await?;

    let current = OfflineCache::new(network.clone(), store.clone(), Url::parse(SCOPE)?);
    current.install().await?;
    assert_eq!(store.cache_names().await?.len(), 2);

    let deleted = current.activate().await?;
    assert_eq!(deleted, vec!["gymgo-shell-v0.1.0".to_owned()]);
    assert_eq!(store.cache_names().await?, vec![SHELL_CACHE_NAME.to_owned()]);

    // Nothing left to delete
    assert!(current.activate().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_non_intercepted_requests_pass_through() -> Result<()> {
    let network = FakeNetwork::new();
    let cache = engine(&network);
    let post = Request {
        method: Method::POST,
        ..Request::get(url("data/routine.json"))
    };

    let served = cache.handle(&post).await?;
    assert_eq!(served.source, ResponseSource::Network);
    assert!(cache.store().is_empty().await);

    network.set_offline(true);
    assert!(cache.handle(&post).await.is_err());
    Ok(())
}
