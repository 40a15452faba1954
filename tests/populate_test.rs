// ABOUTME: Integration tests for the database populator
// ABOUTME: Verifies row counts, message invariants, and rerun semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

mod common;

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use virtualclinic::models::AccountRole;
use virtualclinic::seed;

async fn counts(db: &virtualclinic::database::Database) -> HashMap<&'static str, i64> {
    db.table_counts().await.unwrap().into_iter().collect()
}

#[tokio::test]
async fn populate_creates_expected_counts() {
    let db = common::create_test_database().await.unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let summary = seed::populate(&db, &mut rng).await.unwrap();
    assert_eq!(summary.accounts, 221);
    assert_eq!(summary.medical_info, 150);

    let counts = counts(&db).await;
    assert_eq!(counts["specialities"], 10);
    assert_eq!(counts["symptoms"], 15);
    assert_eq!(counts["locations"], 10);
    assert_eq!(counts["hospitals"], 10);
    assert_eq!(counts["accounts"], 221);
    assert_eq!(counts["medical_info"], 150);
    assert_eq!(counts["appointments"], 200);
    assert_eq!(counts["prescriptions"], 200);
    assert_eq!(counts["medical_tests"], 150);
    assert_eq!(counts["messages"], 300);
    assert_eq!(counts["notifications"], 250);
    assert_eq!(counts["actions"], 300);
    assert_eq!(counts["statistics"], 12);
}

#[tokio::test]
async fn populate_creates_accounts_per_role() {
    let db = common::create_test_database().await.unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    seed::populate(&db, &mut rng).await.unwrap();

    assert_eq!(
        db.count_accounts_by_role(AccountRole::Admin).await.unwrap(),
        1
    );
    assert_eq!(
        db.count_accounts_by_role(AccountRole::Doctor)
            .await
            .unwrap(),
        50
    );
    assert_eq!(
        db.count_accounts_by_role(AccountRole::Patient)
            .await
            .unwrap(),
        150
    );
    assert_eq!(db.count_accounts_by_role(AccountRole::Lab).await.unwrap(), 10);
    assert_eq!(
        db.count_accounts_by_role(AccountRole::Chemist)
            .await
            .unwrap(),
        10
    );
}

#[tokio::test]
async fn messages_are_never_sent_to_self() {
    let db = common::create_test_database().await.unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    seed::populate(&db, &mut rng).await.unwrap();

    let self_sends: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM messages WHERE sender_id = target_id")
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert_eq!(self_sends.0, 0);
}

#[tokio::test]
async fn every_patient_has_exactly_one_medical_info_row() {
    let db = common::create_test_database().await.unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    seed::populate(&db, &mut rng).await.unwrap();

    let covered: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM accounts a \
         JOIN medical_info m ON m.account_id = a.id \
         WHERE a.role = 'patient'",
    )
    .fetch_one(db.pool())
    .await
    .unwrap();
    assert_eq!(covered.0, 150);

    let duplicated: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM \
         (SELECT account_id FROM medical_info GROUP BY account_id HAVING COUNT(*) > 1)",
    )
    .fetch_one(db.pool())
    .await
    .unwrap();
    assert_eq!(duplicated.0, 0);
}

#[tokio::test]
async fn second_run_deduplicates_reference_tables_only() {
    let db = common::create_test_database().await.unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    seed::populate(&db, &mut rng).await.unwrap();
    seed::populate(&db, &mut rng).await.unwrap();

    let counts = counts(&db).await;

    // get-or-create reference tables stay put
    assert_eq!(counts["specialities"], 10);
    assert_eq!(counts["symptoms"], 15);
    assert_eq!(counts["locations"], 10);

    // hospitals match on a randomized phone, so they duplicate
    assert_eq!(counts["hospitals"], 20);

    // everything else is a fresh population
    assert_eq!(counts["accounts"], 442);
    assert_eq!(counts["medical_info"], 300);
    assert_eq!(counts["appointments"], 400);
    assert_eq!(counts["prescriptions"], 400);
    assert_eq!(counts["medical_tests"], 300);
    assert_eq!(counts["messages"], 600);
    assert_eq!(counts["notifications"], 500);
    assert_eq!(counts["actions"], 600);
    assert_eq!(counts["statistics"], 24);
}

#[tokio::test]
async fn reset_then_populate_matches_a_first_run() {
    let db = common::create_test_database().await.unwrap();
    let mut rng = StdRng::seed_from_u64(23);

    seed::populate(&db, &mut rng).await.unwrap();
    seed::populate(&db, &mut rng).await.unwrap();

    db.reset_seed_data().await.unwrap();
    seed::populate(&db, &mut rng).await.unwrap();

    let counts = counts(&db).await;
    assert_eq!(counts["accounts"], 221);
    assert_eq!(counts["hospitals"], 10);
    assert_eq!(counts["medical_info"], 150);
    assert_eq!(counts["appointments"], 200);
    assert_eq!(counts["statistics"], 12);
}
