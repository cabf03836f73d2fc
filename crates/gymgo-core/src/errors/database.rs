// ABOUTME: Conversion of sqlx errors into the unified AppError type
// ABOUTME: Compiled only with the database-errors feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        let code = match &error {
            sqlx::Error::RowNotFound => ErrorCode::ResourceNotFound,
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                ErrorCode::SerializationError
            }
            _ => ErrorCode::DatabaseError,
        };
        Self::new(code, format!("Database operation failed: {error}")).with_source(error)
    }
}
