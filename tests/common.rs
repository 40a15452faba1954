// ABOUTME: Shared test utilities for the VirtualClinic seeding tools
// ABOUTME: Provides quiet logging setup and an in-memory database factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers
#![allow(dead_code)]

//! Shared test setup for the integration tests.

use std::sync::Once;

use virtualclinic::database::Database;
use virtualclinic::errors::AppResult;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable controls test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> AppResult<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}
