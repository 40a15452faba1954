// ABOUTME: Sample prescription seeder for the VirtualClinic database
// ABOUTME: Inserts four fixed prescriptions for the first doctor/patient pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

//! Sample prescription seeder for VirtualClinic.
//!
//! Attaches four hard-coded prescriptions, dated today, to the first doctor
//! and patient found in the database. Intended for a database that has
//! already been populated (see `clinic-cli populate`); with no doctor or
//! patient present it logs a message and exits without writing anything.
//!
//! Usage:
//! ```bash
//! # Seed against the default database
//! cargo run --bin seed-prescriptions
//!
//! # Seed a specific database
//! cargo run --bin seed-prescriptions -- --database-url sqlite:./dev.db
//!
//! # Verbose output
//! cargo run --bin seed-prescriptions -- -v
//! ```

use std::env;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use virtualclinic::database::Database;
use virtualclinic::seed::seed_sample_prescriptions;

#[derive(Parser)]
#[command(
    name = "seed-prescriptions",
    about = "VirtualClinic Sample Prescription Seeder",
    long_about = "Insert four sample prescriptions for the first doctor/patient pair"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== VirtualClinic Sample Prescription Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/clinic.db".into());

    info!("Connecting to database: {}", database_url);
    let db = Database::new(&database_url).await?;

    seed_sample_prescriptions(&db).await?;

    Ok(())
}
