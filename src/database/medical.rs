// ABOUTME: Clinical-record database operations
// ABOUTME: Handles appointments, prescriptions, medical tests, and per-patient medical info
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

use super::Database;
use crate::errors::AppResult;
use crate::models::{Appointment, MedicalInfo, MedicalTest, Prescription};

impl Database {
    /// Create clinical-record tables
    pub(super) async fn migrate_medical(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS appointments (
                id TEXT PRIMARY KEY,
                doctor_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                patient_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                description TEXT NOT NULL,
                symptom_id TEXT NOT NULL REFERENCES symptoms(id) ON DELETE CASCADE,
                status TEXT NOT NULL CHECK (status IN ('Active', 'Completed', 'Cancelled')),
                hospital_id TEXT NOT NULL REFERENCES hospitals(id) ON DELETE CASCADE,
                kind TEXT NOT NULL CHECK (kind IN ('Offline', 'Online')),
                start_time DATETIME NOT NULL,
                end_time DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS prescriptions (
                id TEXT PRIMARY KEY,
                patient_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                doctor_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                date DATE NOT NULL,
                medication TEXT NOT NULL,
                strength TEXT NOT NULL,
                instruction TEXT NOT NULL,
                refill INTEGER NOT NULL DEFAULT 0,
                active BOOLEAN NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS medical_tests (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                date DATE NOT NULL,
                hospital_id TEXT NOT NULL REFERENCES hospitals(id) ON DELETE CASCADE,
                description TEXT NOT NULL,
                doctor_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                patient_id TEXT NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                private BOOLEAN NOT NULL DEFAULT 0,
                completed BOOLEAN NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS medical_info (
                id TEXT PRIMARY KEY,
                account_id TEXT UNIQUE NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
                blood_type TEXT NOT NULL,
                allergy TEXT NOT NULL,
                alzheimer BOOLEAN NOT NULL DEFAULT 0,
                asthma BOOLEAN NOT NULL DEFAULT 0,
                diabetes BOOLEAN NOT NULL DEFAULT 0,
                stroke BOOLEAN NOT NULL DEFAULT 0,
                comments TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_appointments_doctor ON appointments(doctor_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_appointments_patient ON appointments(patient_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_prescriptions_patient ON prescriptions(patient_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_medical_tests_patient ON medical_tests(patient_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert an appointment row
    pub async fn create_appointment(&self, appointment: &Appointment) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO appointments (id, doctor_id, patient_id, description, symptom_id, status, hospital_id, kind, start_time, end_time) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(appointment.id.to_string())
        .bind(appointment.doctor.to_string())
        .bind(appointment.patient.to_string())
        .bind(&appointment.description)
        .bind(appointment.symptom.to_string())
        .bind(appointment.status.as_str())
        .bind(appointment.hospital.to_string())
        .bind(appointment.kind.as_str())
        .bind(appointment.start_time)
        .bind(appointment.end_time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a prescription row
    pub async fn create_prescription(&self, prescription: &Prescription) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO prescriptions (id, patient_id, doctor_id, date, medication, strength, instruction, refill, active) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(prescription.id.to_string())
        .bind(prescription.patient.to_string())
        .bind(prescription.doctor.to_string())
        .bind(prescription.date)
        .bind(&prescription.medication)
        .bind(&prescription.strength)
        .bind(&prescription.instruction)
        .bind(prescription.refill)
        .bind(prescription.active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a medical-test row
    pub async fn create_medical_test(&self, test: &MedicalTest) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO medical_tests (id, name, date, hospital_id, description, doctor_id, patient_id, private, completed) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(test.id.to_string())
        .bind(&test.name)
        .bind(test.date)
        .bind(test.hospital.to_string())
        .bind(&test.description)
        .bind(test.doctor.to_string())
        .bind(test.patient.to_string())
        .bind(test.private)
        .bind(test.completed)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert medical info for an account unless a row already exists.
    ///
    /// Returns `true` when a row was created.
    pub async fn ensure_medical_info(&self, info: &MedicalInfo) -> AppResult<bool> {
        let existing: Option<(String,)> =
            sqlx::query_as("SELECT id FROM medical_info WHERE account_id = ?")
                .bind(info.account.to_string())
                .fetch_optional(&self.pool)
                .await?;

        if existing.is_some() {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO medical_info (id, account_id, blood_type, allergy, alzheimer, asthma, diabetes, stroke, comments) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(info.id.to_string())
        .bind(info.account.to_string())
        .bind(&info.blood_type)
        .bind(&info.allergy)
        .bind(info.alzheimer)
        .bind(info.asthma)
        .bind(info.diabetes)
        .bind(info.stroke)
        .bind(&info.comments)
        .execute(&self.pool)
        .await?;

        Ok(true)
    }
}
