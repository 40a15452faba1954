// ABOUTME: Integration tests for the sample prescription seeder
// ABOUTME: Covers the empty-database guard and the fixed four-row insert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

mod common;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use sqlx::Row;
use uuid::Uuid;

use virtualclinic::database::Database;
use virtualclinic::models::{Account, AccountRole, Profile, Sex};
use virtualclinic::seed::seed_sample_prescriptions;

async fn add_account(
    db: &Database,
    role: AccountRole,
    username: &str,
    created_at: DateTime<Utc>,
) -> Uuid {
    let profile = Profile {
        id: Uuid::new_v4(),
        firstname: "Test".to_string(),
        lastname: "User".to_string(),
        sex: Sex::Female,
        birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        phone: "5550000000".to_string(),
        allergies: String::new(),
        pref_hospital: None,
        primary_care_doctor: None,
        speciality: None,
    };
    db.create_profile(&profile).await.unwrap();

    let account = Account {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{username}@clinic.com"),
        password_hash: "unused".to_string(),
        role,
        profile_id: profile.id,
        created_at,
    };
    db.create_account(&account).await.unwrap();
    account.id
}

async fn prescription_count(db: &Database) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prescriptions")
        .fetch_one(db.pool())
        .await
        .unwrap();
    row.0
}

#[tokio::test]
async fn empty_database_inserts_nothing() {
    let db = common::create_test_database().await.unwrap();

    let inserted = seed_sample_prescriptions(&db).await.unwrap();

    assert_eq!(inserted, 0);
    assert_eq!(prescription_count(&db).await, 0);
}

#[tokio::test]
async fn doctor_without_patient_inserts_nothing() {
    let db = common::create_test_database().await.unwrap();
    add_account(&db, AccountRole::Doctor, "doctor_0", Utc::now()).await;

    let inserted = seed_sample_prescriptions(&db).await.unwrap();

    assert_eq!(inserted, 0);
    assert_eq!(prescription_count(&db).await, 0);
}

#[tokio::test]
async fn inserts_four_prescriptions_for_first_pair() {
    let db = common::create_test_database().await.unwrap();
    let now = Utc::now();
    let first_doctor = add_account(&db, AccountRole::Doctor, "doctor_0", now - Duration::hours(2)).await;
    add_account(&db, AccountRole::Doctor, "doctor_1", now).await;
    let first_patient =
        add_account(&db, AccountRole::Patient, "patient_0", now - Duration::hours(1)).await;
    add_account(&db, AccountRole::Patient, "patient_1", now).await;

    let inserted = seed_sample_prescriptions(&db).await.unwrap();
    assert_eq!(inserted, 4);
    assert_eq!(prescription_count(&db).await, 4);

    let rows = sqlx::query(
        "SELECT doctor_id, patient_id, medication, date, active FROM prescriptions ORDER BY medication",
    )
    .fetch_all(db.pool())
    .await
    .unwrap();

    let today = Utc::now().date_naive();
    let mut medications = Vec::new();
    for row in &rows {
        let doctor_id: String = row.get("doctor_id");
        let patient_id: String = row.get("patient_id");
        let date: NaiveDate = row.get("date");
        let active: bool = row.get("active");
        assert_eq!(doctor_id, first_doctor.to_string());
        assert_eq!(patient_id, first_patient.to_string());
        assert_eq!(date, today);
        assert!(active);
        medications.push(row.get::<String, _>("medication"));
    }
    assert_eq!(
        medications,
        ["Amoxicillin", "Aspirin", "Lisinopril", "Metformin"]
    );
}

#[tokio::test]
async fn running_twice_duplicates_rows() {
    let db = common::create_test_database().await.unwrap();
    add_account(&db, AccountRole::Doctor, "doctor_0", Utc::now()).await;
    add_account(&db, AccountRole::Patient, "patient_0", Utc::now()).await;

    seed_sample_prescriptions(&db).await.unwrap();
    seed_sample_prescriptions(&db).await.unwrap();

    assert_eq!(prescription_count(&db).await, 8);
}
