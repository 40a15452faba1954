// ABOUTME: Error types shared across the VirtualClinic seeding library
// ABOUTME: Defines AppError and the AppResult alias used by all modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

//! Unified error handling for the seeding library.
//!
//! The library surfaces a single [`AppError`]; the binaries run on
//! `anyhow::Result` and let `?` lift these into their exit status.

use thiserror::Error;

/// Errors produced by the seeding library
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying database operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failed
    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// A stored row id could not be parsed back into a `Uuid`
    #[error("invalid row id: {0}")]
    RowId(#[from] uuid::Error),

    /// A stored value does not match any known enum variant
    #[error("invalid {field}: {value}")]
    InvalidValue {
        /// Field or column the value came from
        field: &'static str,
        /// The offending value
        value: String,
    },
}

impl AppError {
    /// Shorthand for [`AppError::InvalidValue`]
    #[must_use]
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

/// Result alias used throughout the library
pub type AppResult<T> = Result<T, AppError>;
