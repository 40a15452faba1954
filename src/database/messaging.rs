// ABOUTME: Message and notification database operations
// ABOUTME: Handles the account-to-account inbox and per-account notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

use super::Database;
use crate::errors::AppResult;
use crate::models::{Message, Notification};

impl Database {
    /// Create messaging tables
    pub(super) async fn migrate_messaging(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS messages (
                id TEXT PRIMARY KEY,
                target_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                sender_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                header TEXT NOT NULL,
                body TEXT NOT NULL,
                timestamp DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS notifications (
                id TEXT PRIMARY KEY,
                account_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                message TEXT NOT NULL,
                read BOOLEAN NOT NULL DEFAULT 0,
                sent_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_target ON messages(target_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_notifications_account ON notifications(account_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a message row
    pub async fn create_message(&self, message: &Message) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO messages (id, target_id, sender_id, header, body, timestamp) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(message.id.to_string())
        .bind(message.target.to_string())
        .bind(message.sender.to_string())
        .bind(&message.header)
        .bind(&message.body)
        .bind(message.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a notification row
    pub async fn create_notification(&self, notification: &Notification) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO notifications (id, account_id, message, read, sent_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(notification.id.to_string())
        .bind(notification.account.to_string())
        .bind(&notification.message)
        .bind(notification.read)
        .bind(notification.sent_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
