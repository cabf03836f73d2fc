// ABOUTME: Conversion of reqwest errors into the unified AppError type
// ABOUTME: Compiled only with the network-errors feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        // Connect/timeout failures mean "offline"; anything else is an upstream error
        let code = if error.is_connect() || error.is_timeout() {
            ErrorCode::ExternalServiceUnavailable
        } else {
            ErrorCode::ExternalServiceError
        };
        Self::new(code, format!("Network request failed: {error}")).with_source(error)
    }
}
