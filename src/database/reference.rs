// ABOUTME: Reference-data database operations for specialities, symptoms, locations, hospitals
// ABOUTME: Implements the get-or-create lookups keyed on each table's natural key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

//! Reference tables are deduplicated by natural key: a second populate run
//! finds the existing rows instead of inserting fresh ones. Hospitals are the
//! exception in practice, because the caller passes a freshly randomized
//! phone number as part of the key.

use uuid::Uuid;

use super::Database;
use crate::errors::AppResult;

impl Database {
    /// Create reference tables
    pub(super) async fn migrate_reference(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS specialities (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS symptoms (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS locations (
                id TEXT PRIMARY KEY,
                address TEXT NOT NULL,
                city TEXT NOT NULL,
                zip TEXT NOT NULL,
                state TEXT NOT NULL,
                country TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS hospitals (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                phone TEXT NOT NULL,
                location_id TEXT NOT NULL REFERENCES locations(id) ON DELETE CASCADE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_specialities_name ON specialities(name)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_symptoms_name ON symptoms(name)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_hospitals_name ON hospitals(name)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Fetch a speciality by (name, description), inserting it if absent
    pub async fn get_or_create_speciality(
        &self,
        name: &str,
        description: &str,
    ) -> AppResult<Uuid> {
        let existing: Option<(String,)> =
            sqlx::query_as("SELECT id FROM specialities WHERE name = ? AND description = ?")
                .bind(name)
                .bind(description)
                .fetch_optional(&self.pool)
                .await?;

        if let Some((id,)) = existing {
            return Ok(Uuid::parse_str(&id)?);
        }

        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO specialities (id, name, description) VALUES (?, ?, ?)")
            .bind(id.to_string())
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    /// Fetch a symptom by (name, description), inserting it if absent
    pub async fn get_or_create_symptom(&self, name: &str, description: &str) -> AppResult<Uuid> {
        let existing: Option<(String,)> =
            sqlx::query_as("SELECT id FROM symptoms WHERE name = ? AND description = ?")
                .bind(name)
                .bind(description)
                .fetch_optional(&self.pool)
                .await?;

        if let Some((id,)) = existing {
            return Ok(Uuid::parse_str(&id)?);
        }

        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO symptoms (id, name, description) VALUES (?, ?, ?)")
            .bind(id.to_string())
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    /// Fetch a location by (city, zip, state, country), inserting it with the
    /// given address if absent. The address is not part of the match key.
    pub async fn get_or_create_location(
        &self,
        address: &str,
        city: &str,
        zip: &str,
        state: &str,
        country: &str,
    ) -> AppResult<Uuid> {
        let existing: Option<(String,)> = sqlx::query_as(
            "SELECT id FROM locations WHERE city = ? AND zip = ? AND state = ? AND country = ?",
        )
        .bind(city)
        .bind(zip)
        .bind(state)
        .bind(country)
        .fetch_optional(&self.pool)
        .await?;

        if let Some((id,)) = existing {
            return Ok(Uuid::parse_str(&id)?);
        }

        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO locations (id, address, city, zip, state, country) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(address)
        .bind(city)
        .bind(zip)
        .bind(state)
        .bind(country)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// Fetch a hospital by (name, phone, location), inserting it if absent.
    ///
    /// The phone number is part of the match key, so callers passing a
    /// randomized phone get a new row every time.
    pub async fn get_or_create_hospital(
        &self,
        name: &str,
        phone: &str,
        location_id: Uuid,
    ) -> AppResult<Uuid> {
        let existing: Option<(String,)> = sqlx::query_as(
            "SELECT id FROM hospitals WHERE name = ? AND phone = ? AND location_id = ?",
        )
        .bind(name)
        .bind(phone)
        .bind(location_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        if let Some((id,)) = existing {
            return Ok(Uuid::parse_str(&id)?);
        }

        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO hospitals (id, name, phone, location_id) VALUES (?, ?, ?, ?)")
            .bind(id.to_string())
            .bind(name)
            .bind(phone)
            .bind(location_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(id)
    }
}
