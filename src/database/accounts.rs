// ABOUTME: Account and profile database operations
// ABOUTME: Handles identity row creation and role-based lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

use std::str::FromStr;

use sqlx::Row;
use uuid::Uuid;

use super::Database;
use crate::errors::AppResult;
use crate::models::{Account, AccountRole, Profile};

impl Database {
    /// Create profiles and accounts tables
    pub(super) async fn migrate_accounts(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS profiles (
                id TEXT PRIMARY KEY,
                firstname TEXT NOT NULL,
                lastname TEXT NOT NULL,
                sex TEXT NOT NULL CHECK (sex IN ('M', 'F')),
                birthday DATE NOT NULL,
                phone TEXT NOT NULL,
                allergies TEXT NOT NULL DEFAULT '',
                pref_hospital TEXT REFERENCES hospitals(id) ON DELETE SET NULL,
                primary_care_doctor TEXT REFERENCES accounts(id) ON DELETE SET NULL,
                speciality TEXT REFERENCES specialities(id) ON DELETE SET NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS accounts (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                email TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL CHECK (role IN ('admin', 'doctor', 'patient', 'lab', 'chemist')),
                profile_id TEXT NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_accounts_role ON accounts(role)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a profile row
    pub async fn create_profile(&self, profile: &Profile) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO profiles (id, firstname, lastname, sex, birthday, phone, allergies, pref_hospital, primary_care_doctor, speciality) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(profile.id.to_string())
        .bind(&profile.firstname)
        .bind(&profile.lastname)
        .bind(profile.sex.as_str())
        .bind(profile.birthday)
        .bind(&profile.phone)
        .bind(&profile.allergies)
        .bind(profile.pref_hospital.map(|id| id.to_string()))
        .bind(profile.primary_care_doctor.map(|id| id.to_string()))
        .bind(profile.speciality.map(|id| id.to_string()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert an account row. Fails on a duplicate username.
    pub async fn create_account(&self, account: &Account) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO accounts (id, username, email, password_hash, role, profile_id, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(account.id.to_string())
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(account.profile_id.to_string())
        .bind(account.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Earliest-created account with the given role, if any
    pub async fn first_account_by_role(&self, role: AccountRole) -> AppResult<Option<Account>> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, role, profile_id, created_at \
             FROM accounts WHERE role = ? ORDER BY created_at, id LIMIT 1",
        )
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id_str: String = row.get("id");
        let role_str: String = row.get("role");
        let profile_str: String = row.get("profile_id");

        Ok(Some(Account {
            id: Uuid::parse_str(&id_str)?,
            username: row.get("username"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            role: AccountRole::from_str(&role_str)?,
            profile_id: Uuid::parse_str(&profile_str)?,
            created_at: row.get("created_at"),
        }))
    }

    /// Number of accounts with the given role
    pub async fn count_accounts_by_role(&self, role: AccountRole) -> AppResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts WHERE role = ?")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}
