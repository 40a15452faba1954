// ABOUTME: Stats command for clinic-cli
// ABOUTME: Prints current row counts for every clinic table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

use anyhow::Result;
use tracing::info;

use virtualclinic::database::Database;

/// Print row counts per table
pub async fn run(database: &Database) -> Result<()> {
    for (table, count) in database.table_counts().await? {
        info!("{}: {}", table, count);
    }
    Ok(())
}
