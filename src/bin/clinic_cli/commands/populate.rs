// ABOUTME: Populate command for clinic-cli
// ABOUTME: Runs the full database population and reports what was created
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use virtualclinic::database::Database;
use virtualclinic::seed::populate;

/// Populate the database with randomized sample data
pub async fn run(database: &Database, seed: Option<u64>, reset: bool) -> Result<()> {
    if reset {
        info!("Resetting seeded data...");
        database.reset_seed_data().await?;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = populate(database, &mut rng).await?;

    info!("=== Population Complete ===");
    info!("Created this run:");
    info!("  - {} accounts", summary.accounts);
    info!("  - {} medical info rows", summary.medical_info);
    info!("  - {} appointments", summary.appointments);
    info!("  - {} prescriptions", summary.prescriptions);
    info!("  - {} medical tests", summary.medical_tests);
    info!("  - {} messages", summary.messages);
    info!("  - {} notifications", summary.notifications);
    info!("  - {} actions", summary.actions);
    info!("  - {} statistics periods", summary.statistics);

    info!("Database totals:");
    for (table, count) in database.table_counts().await? {
        info!("  {}: {}", table, count);
    }

    Ok(())
}
