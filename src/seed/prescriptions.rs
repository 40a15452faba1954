// ABOUTME: Sample-prescription seeder for an already-populated database
// ABOUTME: Attaches four fixed prescriptions to the first doctor/patient pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use super::fixtures;
use crate::database::Database;
use crate::errors::AppResult;
use crate::models::{AccountRole, Prescription};

/// Insert the four sample prescriptions for the first doctor/patient pair.
///
/// Returns the number of rows inserted: four on success, zero when the
/// database holds no doctor or no patient (a message is logged and the run
/// ends normally). There is no idempotence guard; calling this twice inserts
/// eight rows.
pub async fn seed_sample_prescriptions(db: &Database) -> AppResult<usize> {
    let doctor = db.first_account_by_role(AccountRole::Doctor).await?;
    let patient = db.first_account_by_role(AccountRole::Patient).await?;

    let (Some(doctor), Some(patient)) = (doctor, patient) else {
        error!("No doctors or patients found in the database.");
        error!("Please create a doctor and patient account first.");
        return Ok(0);
    };

    let today = Utc::now().date_naive();

    for sample in &fixtures::SAMPLE_PRESCRIPTIONS {
        let prescription = Prescription {
            id: Uuid::new_v4(),
            patient: patient.id,
            doctor: doctor.id,
            date: today,
            medication: sample.medication.to_string(),
            strength: sample.strength.to_string(),
            instruction: sample.instruction.to_string(),
            refill: sample.refill,
            active: true,
        };
        db.create_prescription(&prescription).await?;
        info!(
            "Created prescription: {} for {}",
            sample.medication, patient.username
        );
    }

    info!(
        "Successfully added {} sample prescriptions",
        fixtures::SAMPLE_PRESCRIPTIONS.len()
    );
    Ok(fixtures::SAMPLE_PRESCRIPTIONS.len())
}
