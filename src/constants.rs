// ABOUTME: Application constants and environment variable accessors
// ABOUTME: Re-exports domain constants from gymgo-core and adds runtime defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use gymgo_core::constants::{cache, display, program, service_names, storage};

/// Runtime defaults
pub mod defaults {
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/gymgo.db";

    /// Default directory holding `routine.json` and `techniques.json`
    pub const CONTENT_DIR: &str = "./data";

    /// Routine document file name
    pub const ROUTINE_FILE: &str = "routine.json";

    /// Technique library file name
    pub const TECHNIQUES_FILE: &str = "techniques.json";

    /// Default timeout for content fetches, in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 10;
}

/// Environment variable names and accessors
pub mod env_config {
    use std::env;

    /// Database URL variable
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Local content directory variable
    pub const CONTENT_DIR: &str = "GYMGO_CONTENT_DIR";
    /// Remote app scope URL variable
    pub const CONTENT_URL: &str = "GYMGO_CONTENT_URL";
    /// Program length override variable
    pub const WEEKS_TOTAL: &str = "GYMGO_WEEKS_TOTAL";
    /// Offline cache capacity variable
    pub const CACHE_MAX_ENTRIES: &str = "GYMGO_CACHE_MAX_ENTRIES";
    /// Deployment environment variable
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Database URL from the environment, or the default
    #[must_use]
    pub fn database_url() -> String {
        env::var(DATABASE_URL).unwrap_or_else(|_| super::defaults::DATABASE_URL.to_owned())
    }

    /// Raw value of an optional variable, ignoring blanks
    #[must_use]
    pub fn optional(key: &str) -> Option<String> {
        env::var(key)
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    }
}
