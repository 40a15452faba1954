// ABOUTME: Database connection handling and schema migration for VirtualClinic
// ABOUTME: Wraps a SQLite pool and fans out to per-domain table operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

//! # Database Management
//!
//! A thin wrapper over a `sqlx` SQLite pool. [`Database::new`] connects and
//! brings the schema up to date; the per-domain modules (accounts, reference
//! data, medical records, messaging, activity) provide the row operations the
//! seeders use. All DDL is `CREATE TABLE IF NOT EXISTS`, so migration is
//! idempotent and safe to run on every start.

mod accounts;
mod activity;
mod medical;
mod messaging;
mod reference;

use sqlx::{Pool, Sqlite, SqlitePool};

use crate::errors::AppResult;

/// Row-count queries for every seeded table, in dependency order
const TABLE_COUNTS: &[(&str, &str)] = &[
    ("specialities", "SELECT COUNT(*) FROM specialities"),
    ("symptoms", "SELECT COUNT(*) FROM symptoms"),
    ("locations", "SELECT COUNT(*) FROM locations"),
    ("hospitals", "SELECT COUNT(*) FROM hospitals"),
    ("accounts", "SELECT COUNT(*) FROM accounts"),
    ("medical_info", "SELECT COUNT(*) FROM medical_info"),
    ("appointments", "SELECT COUNT(*) FROM appointments"),
    ("prescriptions", "SELECT COUNT(*) FROM prescriptions"),
    ("medical_tests", "SELECT COUNT(*) FROM medical_tests"),
    ("messages", "SELECT COUNT(*) FROM messages"),
    ("notifications", "SELECT COUNT(*) FROM notifications"),
    ("actions", "SELECT COUNT(*) FROM actions"),
    ("statistics", "SELECT COUNT(*) FROM statistics"),
];

/// Tables cleared by [`Database::reset_seed_data`], children before parents
const RESET_ORDER: &[&str] = &[
    "actions",
    "statistics",
    "notifications",
    "messages",
    "medical_info",
    "medical_tests",
    "prescriptions",
    "appointments",
    "accounts",
    "profiles",
    "hospitals",
    "locations",
    "symptoms",
    "specialities",
];

/// Database handle for the clinic schema
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect and run schema migration.
    ///
    /// For `sqlite:` URLs the file is created if it does not exist.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the underlying pool for direct queries
    #[must_use]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Bring the schema up to date
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_reference().await?;
        self.migrate_accounts().await?;
        self.migrate_medical().await?;
        self.migrate_messaging().await?;
        self.migrate_activity().await?;
        Ok(())
    }

    /// Current row count per seeded table, labeled
    pub async fn table_counts(&self) -> AppResult<Vec<(&'static str, i64)>> {
        let mut counts = Vec::with_capacity(TABLE_COUNTS.len());
        for (label, query) in TABLE_COUNTS {
            let row: (i64,) = sqlx::query_as(query).fetch_one(&self.pool).await?;
            counts.push((*label, row.0));
        }
        Ok(counts)
    }

    /// Delete every seeded row, children first so foreign keys hold
    pub async fn reset_seed_data(&self) -> AppResult<()> {
        for table in RESET_ORDER {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }
}
