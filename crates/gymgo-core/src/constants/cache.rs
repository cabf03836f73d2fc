// ABOUTME: Offline shell cache constants
// ABOUTME: Versioned cache name, data path rules, and synthesized offline bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Versioned name of the shell cache; bumping it evicts older caches on activate
pub const SHELL_CACHE_NAME: &str = "gymgo-shell-v0.2.4";

/// Path prefix (relative to the app scope) of network-first data documents
pub const DATA_PATH_PREFIX: &str = "data/";

/// Suffix of network-first data documents
pub const DATA_PATH_SUFFIX: &str = ".json";

/// Root document served to navigation requests when offline
pub const ROOT_DOCUMENT: &str = "index.html";

/// Body synthesized for a data document when neither network nor cache answers
pub const OFFLINE_DATA_BODY: &str = r#"{"error":"offline"}"#;

/// Body of the explicit failure response
pub const OFFLINE_TEXT_BODY: &str = "Offline";

/// Status of the explicit failure response
pub const OFFLINE_STATUS: u16 = 503;

/// Default maximum entries held by the in-memory cache store
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 256;

/// Shell assets pre-cached on install, relative to the app scope
pub const SHELL_ASSETS: &[&str] = &[
    "",
    "index.html",
    "css/tokens.css",
    "css/styles.css",
    "js/app.js",
    "js/core/dom.js",
    "js/core/store.js",
    "js/core/utils.js",
    "js/core/db.js",
    "js/ui/toast.js",
    "js/ui/modal.js",
    "js/ui/screens/today.js",
    "js/ui/screens/week.js",
    "js/ui/screens/progress.js",
    "js/ui/screens/techniques.js",
    "js/sw/register-sw.js",
    "manifest.webmanifest",
    "icons/icon-192.png",
    "icons/icon-512.png",
];
