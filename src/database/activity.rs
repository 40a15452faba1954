// ABOUTME: Activity-log and statistics database operations
// ABOUTME: Append-only tables with integer row ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

use super::Database;
use crate::errors::AppResult;
use crate::models::{Action, StatisticsPeriod};

impl Database {
    /// Create activity-log and statistics tables
    pub(super) async fn migrate_activity(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS actions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                description TEXT NOT NULL,
                account_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                performed_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS statistics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                start_date DATE NOT NULL,
                end_date DATE NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_actions_account ON actions(account_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_actions_performed_at ON actions(performed_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Append an activity-log entry
    pub async fn record_action(&self, action: &Action) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO actions (type, description, account_id, performed_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(action.action_type.as_str())
        .bind(&action.description)
        .bind(action.account.to_string())
        .bind(action.performed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a statistics reporting period
    pub async fn create_statistics_period(&self, period: StatisticsPeriod) -> AppResult<()> {
        sqlx::query("INSERT INTO statistics (start_date, end_date) VALUES (?, ?)")
            .bind(period.start_date)
            .bind(period.end_date)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
