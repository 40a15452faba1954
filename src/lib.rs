// ABOUTME: Library entry point for the VirtualClinic seeding tools
// ABOUTME: Exposes the domain models, database layer, and seeding routines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

#![deny(unsafe_code)]

//! # VirtualClinic Seeding Tools
//!
//! Development tooling for the VirtualClinic backend: populate a clinic
//! database with randomized fixture data, or drop a handful of sample
//! prescriptions into an already-populated database.
//!
//! ## Binaries
//!
//! - `clinic-cli populate` fills every table (reference data, accounts with
//!   profiles, appointments, prescriptions, tests, messages, notifications,
//!   activity log, statistics) with fake-but-plausible records.
//! - `clinic-cli stats` prints current row counts per table.
//! - `seed-prescriptions` attaches four sample prescriptions to the first
//!   doctor/patient pair it finds.
//!
//! ## Architecture
//!
//! - **Models**: typed rows and enumerations for every clinic table
//! - **Database**: `sqlx`/SQLite wrapper with idempotent schema migration
//! - **Seed**: the fixture lists and the one-shot seeding procedures
//!
//! The seeding procedures live in the library (rather than the binaries) so
//! integration tests can run them against an in-memory database.

/// Database layer: connection handling, schema migration, row operations
pub mod database;

/// Unified error type for the library
pub mod errors;

/// Domain models for the clinic schema
pub mod models;

/// Seeding procedures and fixture data
pub mod seed;
