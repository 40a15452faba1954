// ABOUTME: Integration tests for the database layer
// ABOUTME: Covers migration idempotence, get-or-create semantics, and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

mod common;

use virtualclinic::database::Database;

#[tokio::test]
async fn migration_is_idempotent_on_a_file_database() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("clinic.db").display());

    let db = Database::new(&url).await.unwrap();
    let speciality = db
        .get_or_create_speciality("Cardiology", "Heart and cardiovascular diseases")
        .await
        .unwrap();
    drop(db);

    // Reopening runs migrate() again and must leave existing rows alone
    let db = Database::new(&url).await.unwrap();
    let again = db
        .get_or_create_speciality("Cardiology", "Heart and cardiovascular diseases")
        .await
        .unwrap();
    assert_eq!(speciality, again);
}

#[tokio::test]
async fn get_or_create_speciality_dedupes_by_name_and_description() {
    let db = common::create_test_database().await.unwrap();

    let first = db
        .get_or_create_speciality("Neurology", "Brain and nervous system")
        .await
        .unwrap();
    let second = db
        .get_or_create_speciality("Neurology", "Brain and nervous system")
        .await
        .unwrap();
    assert_eq!(first, second);

    let other = db
        .get_or_create_speciality("Neurology", "Nerves and the brain")
        .await
        .unwrap();
    assert_ne!(first, other);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM specialities")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count.0, 2);
}

#[tokio::test]
async fn get_or_create_location_ignores_address_in_the_key() {
    let db = common::create_test_database().await.unwrap();

    let first = db
        .get_or_create_location("1 Healthcare Street, Mumbai", "Mumbai", "400001", "Maharashtra", "India")
        .await
        .unwrap();
    let second = db
        .get_or_create_location("99 Somewhere Else, Mumbai", "Mumbai", "400001", "Maharashtra", "India")
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn hospital_key_includes_the_phone_number() {
    let db = common::create_test_database().await.unwrap();
    let location = db
        .get_or_create_location("1 Healthcare Street, Delhi", "Delhi", "110001", "Delhi", "India")
        .await
        .unwrap();

    let first = db
        .get_or_create_hospital("Apollo Hospital", "1112223333", location)
        .await
        .unwrap();
    let same = db
        .get_or_create_hospital("Apollo Hospital", "1112223333", location)
        .await
        .unwrap();
    assert_eq!(first, same);

    // a fresh phone means a fresh row, which is what the populator relies on
    let other = db
        .get_or_create_hospital("Apollo Hospital", "9998887777", location)
        .await
        .unwrap();
    assert_ne!(first, other);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hospitals")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count.0, 2);
}

#[tokio::test]
async fn reset_seed_data_clears_every_table() {
    let db = common::create_test_database().await.unwrap();

    let location = db
        .get_or_create_location("1 Healthcare Street, Pune", "Pune", "411001", "Maharashtra", "India")
        .await
        .unwrap();
    db.get_or_create_hospital("Ruby Hall Clinic", "0123456789", location)
        .await
        .unwrap();
    db.get_or_create_symptom("Fever", "High body temperature")
        .await
        .unwrap();

    db.reset_seed_data().await.unwrap();

    for (table, count) in db.table_counts().await.unwrap() {
        assert_eq!(count, 0, "table {table} should be empty after reset");
    }
}
