// ABOUTME: Clinic CLI - management command-line tool for the VirtualClinic database
// ABOUTME: Hosts the database populator and row-count reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers
//!
//! Usage:
//! ```bash
//! # Populate the database with randomized sample data
//! clinic-cli populate
//!
//! # Reproducible population
//! clinic-cli populate --seed 42
//!
//! # Clear previously seeded rows first
//! clinic-cli populate --reset
//!
//! # Show row counts per table
//! clinic-cli stats
//! ```

mod commands;

use std::env;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use virtualclinic::database::Database;

#[derive(Parser)]
#[command(
    name = "clinic-cli",
    about = "VirtualClinic Management CLI",
    long_about = "Management tool for the VirtualClinic database: populate it with sample data and inspect row counts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Populate the database with sample data for testing
    Populate {
        /// RNG seed for a reproducible population
        #[arg(long)]
        seed: Option<u64>,

        /// Delete previously seeded rows before populating
        #[arg(long)]
        reset: bool,
    },

    /// Show current row counts for every table
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let database_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/clinic.db".into());

    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url).await?;

    match cli.command {
        Command::Populate { seed, reset } => {
            commands::populate::run(&database, seed, reset).await?;
        }
        Command::Stats => {
            commands::stats::run(&database).await?;
        }
    }

    Ok(())
}
