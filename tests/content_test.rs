// ABOUTME: Integration tests for loading routine and technique content
// ABOUTME: Local directory reads, remote fetches through the offline cache, and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::FakeNetwork;
use gymgo::content::Content;
use gymgo::errors::ErrorCode;
use gymgo::offline::memory::MemoryCacheStore;
use gymgo::offline::OfflineCache;
use gymgo_intelligence::CompositeExt;
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;
use url::Url;

fn routine_json() -> Value {
    json!({
        "program": { "weeks": 6 },
        "days": [{
            "id": "upper",
            "title": "Upper",
            "exercises": [
                {
                    "id": "bench", "name": "Bench press", "sets": 3,
                    "repRange": [8, 12], "tempo": "3-1-1-0", "restSec": [90, 120],
                    "techniqueId": "rest_pause"
                },
                {
                    "id": "arms", "name": "Giant set (Curl + Triceps)", "sets": 3,
                    "repRange": [10, 12], "tempo": "2-0-1-0", "restSec": 60
                }
            ]
        }],
        "schedule": [{ "weekDay": 1, "dayId": "upper" }]
    })
}

fn techniques_json() -> Value {
    json!([
        { "id": "rest_pause", "label": "Rest-pause", "emoji": "⏸️",
          "summary": "Short pauses", "howto": ["Rest 15s"], "example": "60×10 + 3" }
    ])
}

fn write_content(dir: &Path, routine: &Value, techniques: &Value) -> Result<()> {
    std::fs::write(dir.join("routine.json"), serde_json::to_vec(routine)?)?;
    std::fs::write(dir.join("techniques.json"), serde_json::to_vec(techniques)?)?;
    Ok(())
}

#[tokio::test]
async fn test_from_dir_reads_both_documents() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;
    write_content(dir.path(), &routine_json(), &techniques_json())?;

    let content = Content::from_dir(dir.path()).await?;
    assert_eq!(content.weeks_total(), 6);
    assert_eq!(content.routine.days[0].exercises.len(), 2);
    assert_eq!(content.techniques.len(), 1);

    let bench = content.routine.find_exercise("bench").unwrap();
    assert_eq!(
        content.technique_for(bench).map(|t| t.label.as_str()),
        Some("Rest-pause")
    );
    assert!(content.routine.find_exercise("arms").unwrap().is_composite());
    Ok(())
}

#[tokio::test]
async fn test_from_dir_error_codes() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;

    let missing = Content::from_dir(dir.path()).await.unwrap_err();
    assert_eq!(missing.code, ErrorCode::ResourceNotFound);

    std::fs::write(dir.path().join("routine.json"), b"{ not json")?;
    std::fs::write(dir.path().join("techniques.json"), b"[]")?;
    let malformed = Content::from_dir(dir.path()).await.unwrap_err();
    assert_eq!(malformed.code, ErrorCode::InvalidFormat);
    Ok(())
}

#[tokio::test]
async fn test_bundled_sample_content_loads() -> Result<()> {
    common::init_test_logging();
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let content = Content::from_dir(&dir).await?;

    assert!(!content.routine.days.is_empty());
    assert!(!content.routine.schedule.is_empty());
    for slot in &content.routine.schedule {
        assert!(content.routine.find_day(&slot.day_id).is_some());
    }
    for exercise in content.routine.unique_exercises() {
        if let Some(id) = &exercise.technique_id {
            assert!(content.find_technique(id).is_some(), "missing technique {id}");
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_from_remote_uses_network_first_data() -> Result<()> {
    common::init_test_logging();
    let network = FakeNetwork::new();
    network.route_json("/gym/data/routine.json", &routine_json());
    network.route_json("/gym/data/techniques.json", &techniques_json());
    let cache = OfflineCache::new(
        network.clone(),
        MemoryCacheStore::default(),
        Url::parse("https://gym.example/gym/")?,
    );

    let online = Content::from_remote(&cache).await?;
    assert_eq!(online.weeks_total(), 6);

    // Both documents were stored, so the next start works offline
    network.set_offline(true);
    let offline = Content::from_remote(&cache).await?;
    assert_eq!(offline, online);
    Ok(())
}

#[tokio::test]
async fn test_from_remote_offline_without_cache() -> Result<()> {
    common::init_test_logging();
    let network = FakeNetwork::new();
    network.set_offline(true);
    let cache = OfflineCache::new(
        network,
        MemoryCacheStore::default(),
        Url::parse("https://gym.example/")?,
    );

    let error = Content::from_remote(&cache).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    Ok(())
}

#[tokio::test]
async fn test_from_remote_rejects_error_status() -> Result<()> {
    common::init_test_logging();
    let network = FakeNetwork::new();
    network.route_status("/data/routine.json", 404);
    network.route_json("/data/techniques.json", &techniques_json());
    let cache = OfflineCache::new(
        network,
        MemoryCacheStore::default(),
        Url::parse("https://gym.example/")?,
    );

    let error = Content::from_remote(&cache).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    Ok(())
}
