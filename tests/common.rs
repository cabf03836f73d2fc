// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, a sample routine, and store constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::too_many_lines
)]
//! Shared test utilities for `gymgo`
//!
//! The sample routine has three days scheduled Monday, Wednesday and
//! Friday. `arms` is a composite detected from its name; `legs_combo`
//! declares its parts explicitly.

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDate;
use gymgo::content::Content;
use gymgo::database_plugins::{factory::Database, memory::MemoryStore, LogStore};
use gymgo::errors::{AppError, AppResult};
use gymgo::offline::{CachedResponse, Fetcher, Request};
use gymgo_core::models::{
    Day, Exercise, LogEntry, Program, RepRange, RestSpec, Routine, ScheduleSlot, Set, Technique,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Monday the program starts in every fixture
pub fn program_start() -> NaiveDate {
    date(2026, 1, 5)
}

pub fn exercise(id: &str, name: &str, sets: u32, min: u32, max: u32) -> Exercise {
    Exercise {
        id: id.to_owned(),
        name: name.to_owned(),
        sets,
        rep_range: RepRange::new(min, max),
        tempo: "3-1-1-0".to_owned(),
        rest_sec: RestSpec::Range([90, 120]),
        technique_id: None,
        composite: None,
        parts: None,
    }
}

pub fn sample_routine() -> Routine {
    let mut bench = exercise("bench", "Bench press", 3, 8, 12);
    bench.technique_id = Some("rest_pause".to_owned());
    let mut arms = exercise("arms", "Giant set arms (Curl + Triceps)", 3, 10, 12);
    arms.rest_sec = RestSpec::Fixed(60);
    let mut legs_combo = exercise("legs_combo", "Leg finisher", 2, 12, 15);
    legs_combo.composite = Some(true);
    legs_combo.parts = Some(["Leg extension".to_owned(), "Leg curl".to_owned()]);

    Routine {
        program: Program { weeks: 8 },
        days: vec![
            Day {
                id: "upper".to_owned(),
                title: "Upper".to_owned(),
                exercises: vec![bench.clone(), exercise("row", "Cable row", 3, 8, 12), arms],
            },
            Day {
                id: "lower".to_owned(),
                title: "Lower".to_owned(),
                exercises: vec![exercise("squat", "Back squat", 4, 5, 8), legs_combo],
            },
            Day {
                id: "push".to_owned(),
                title: "Push".to_owned(),
                exercises: vec![bench, exercise("ohp", "Overhead press", 3, 6, 10)],
            },
        ],
        schedule: vec![
            ScheduleSlot {
                week_day: 5,
                day_id: "push".to_owned(),
            },
            ScheduleSlot {
                week_day: 1,
                day_id: "upper".to_owned(),
            },
            ScheduleSlot {
                week_day: 3,
                day_id: "lower".to_owned(),
            },
        ],
    }
}

pub fn sample_techniques() -> Vec<Technique> {
    vec![
        Technique {
            id: "rest_pause".to_owned(),
            label: "Rest-pause".to_owned(),
            emoji: Some("⏸️".to_owned()),
            summary: "Short pauses to squeeze extra reps".to_owned(),
            howto: vec!["Hit RIR 0–1".to_owned(), "Rest 15s".to_owned()],
            example: "60×10 + 3 + 2".to_owned(),
        },
        Technique {
            id: "tempo".to_owned(),
            label: "Slow eccentric".to_owned(),
            emoji: None,
            summary: "Three seconds down".to_owned(),
            howto: vec!["Count the lowering".to_owned()],
            example: "3-1-1-0".to_owned(),
        },
    ]
}

pub fn sample_content() -> Content {
    Content::new(sample_routine(), sample_techniques())
}

pub fn set(set_no: u32, weight: f64, reps: u32) -> Set {
    Set::new(set_no, weight, reps, Some(2))
}

pub fn entry(date: NaiveDate, week: u32, exercise_id: &str, sets: Vec<Set>) -> LogEntry {
    LogEntry {
        date,
        week,
        day_id: "upper".to_owned(),
        exercise_id: exercise_id.to_owned(),
        sets,
    }
}

/// Initialized in-memory store
pub async fn create_memory_store() -> Result<Arc<MemoryStore>> {
    init_test_logging();
    let store = MemoryStore::new();
    store.init().await?;
    Ok(Arc::new(store))
}

/// Standard in-memory `SQLite` database
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    Ok(Arc::new(Database::from_url("sqlite::memory:").await?))
}

/// Scripted network for the offline cache
///
/// Routes are matched on the URL path, so version queries are ignored.
/// Unrouted paths answer 200 with a small text body. Clones share state.
#[derive(Clone, Default)]
pub struct FakeNetwork {
    offline: Arc<AtomicBool>,
    routes: Arc<Mutex<HashMap<String, CachedResponse>>>,
    fetches: Arc<AtomicUsize>,
}

impl FakeNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every fetch fail with a transport error
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Answer `path` with `response`
    pub fn route(&self, path: &str, response: CachedResponse) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_owned(), response);
    }

    /// Answer `path` with a JSON document
    pub fn route_json(&self, path: &str, value: &serde_json::Value) {
        self.route(
            path,
            CachedResponse::ok("application/json", serde_json::to_vec(value).unwrap()),
        );
    }

    /// Answer `path` with a bare status code
    pub fn route_status(&self, path: &str, status: u16) {
        self.route(
            path,
            CachedResponse {
                status,
                content_type: None,
                body: Bytes::new(),
            },
        );
    }

    /// Number of fetches attempted, online or not
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for FakeNetwork {
    async fn fetch(&self, request: &Request) -> AppResult<CachedResponse> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::offline(request.url.as_str()));
        }
        let routes = self.routes.lock().unwrap();
        Ok(routes.get(request.url.path()).cloned().unwrap_or_else(|| {
            CachedResponse::ok("text/plain", format!("asset {}", request.url.path()))
        }))
    }
}
