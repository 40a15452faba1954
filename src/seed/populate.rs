// ABOUTME: Database populator creating a full randomized clinic population
// ABOUTME: Runs the dependency-ordered steps from reference data to statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

//! The populator writes in strict dependency order: reference data first
//! (specialities, symptoms, locations, hospitals), then identity records
//! (accounts with profiles), then everything that points at them. Reference
//! tables go through get-or-create; all other steps insert unconditionally,
//! so a rerun produces a second population.

use chrono::{Duration, NaiveDate};
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use super::{date_of_birth, date_this_year, date_time_this_year, fixtures, pick, random_phone};
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Account, AccountRole, Action, ActionType, Appointment, AppointmentKind, AppointmentStatus,
    MedicalInfo, MedicalTest, Message, Notification, Prescription, Profile, Sex,
    StatisticsPeriod,
};

const DOCTORS: usize = 50;
const PATIENTS: usize = 150;
const LAB_TECHNICIANS: usize = 10;
const CHEMISTS: usize = 10;
const APPOINTMENTS: usize = 200;
const PRESCRIPTIONS: usize = 200;
const MEDICAL_TESTS: usize = 150;
const MESSAGES: usize = 300;
const NOTIFICATIONS: usize = 250;
const ACTIONS: usize = 300;
const STATISTICS_MONTHS: u32 = 12;

/// Fixed passwords for seeded accounts, one per role. These are development
/// fixtures; the plaintext is documented so developers can log in.
const ADMIN_PASSWORD: &str = "admin123";
const DOCTOR_PASSWORD: &str = "doctor123";
const PATIENT_PASSWORD: &str = "patient123";
const LAB_PASSWORD: &str = "lab123";
const CHEMIST_PASSWORD: &str = "chemist123";

// Fixture credentials, hashed at the cheapest cost
const SEED_BCRYPT_COST: u32 = 4;

/// Row counts produced by one [`populate`] run
#[derive(Debug, Default, Clone, Copy)]
pub struct PopulateSummary {
    /// Specialities ensured present
    pub specialities: usize,
    /// Symptoms ensured present
    pub symptoms: usize,
    /// Locations ensured present
    pub locations: usize,
    /// Hospitals ensured present
    pub hospitals: usize,
    /// Accounts created
    pub accounts: usize,
    /// Medical-info rows created
    pub medical_info: usize,
    /// Appointments created
    pub appointments: usize,
    /// Prescriptions created
    pub prescriptions: usize,
    /// Medical tests created
    pub medical_tests: usize,
    /// Messages created
    pub messages: usize,
    /// Notifications created
    pub notifications: usize,
    /// Activity-log entries created
    pub actions: usize,
    /// Statistics periods created
    pub statistics: usize,
}

/// Ids of the accounts one populate run created, grouped by role
struct SeededAccounts {
    admin: Uuid,
    doctors: Vec<Uuid>,
    patients: Vec<Uuid>,
    lab_technicians: Vec<Uuid>,
    chemists: Vec<Uuid>,
}

impl SeededAccounts {
    fn all(&self) -> Vec<Uuid> {
        let mut all = Vec::with_capacity(self.total());
        all.push(self.admin);
        all.extend_from_slice(&self.doctors);
        all.extend_from_slice(&self.patients);
        all.extend_from_slice(&self.lab_technicians);
        all.extend_from_slice(&self.chemists);
        all
    }

    fn total(&self) -> usize {
        1 + self.doctors.len()
            + self.patients.len()
            + self.lab_technicians.len()
            + self.chemists.len()
    }
}

/// Populate the database with a full randomized clinic population.
///
/// Any constraint violation aborts the run; rows written before the failure
/// are left in place.
pub async fn populate(db: &Database, rng: &mut StdRng) -> AppResult<PopulateSummary> {
    info!("Starting database population...");
    let mut summary = PopulateSummary::default();

    info!("Creating specialities...");
    let mut specialities = Vec::with_capacity(fixtures::SPECIALITIES.len());
    for (name, description) in fixtures::SPECIALITIES {
        specialities.push(db.get_or_create_speciality(name, description).await?);
    }
    summary.specialities = specialities.len();

    info!("Creating symptoms...");
    let mut symptoms = Vec::with_capacity(fixtures::SYMPTOMS.len());
    for (name, description) in fixtures::SYMPTOMS {
        symptoms.push(db.get_or_create_symptom(name, description).await?);
    }
    summary.symptoms = symptoms.len();

    info!("Creating locations...");
    let mut locations = Vec::with_capacity(fixtures::CITIES.len());
    for (i, (city, zip, state)) in fixtures::CITIES.iter().enumerate() {
        let address = format!("{} Healthcare Street, {city}", i + 1);
        locations.push(
            db.get_or_create_location(&address, city, zip, state, fixtures::COUNTRY)
                .await?,
        );
    }
    summary.locations = locations.len();

    info!("Creating hospitals...");
    let mut hospitals = Vec::with_capacity(fixtures::HOSPITAL_NAMES.len());
    for (i, name) in fixtures::HOSPITAL_NAMES.iter().enumerate() {
        let location = locations[i % locations.len()];
        let phone = random_phone(rng);
        hospitals.push(db.get_or_create_hospital(name, &phone, location).await?);
    }
    summary.hospitals = hospitals.len();

    info!("Creating user accounts...");
    let accounts = seed_accounts(db, rng, &hospitals, &specialities).await?;
    summary.accounts = accounts.total();

    info!("Creating medical information...");
    summary.medical_info = seed_medical_info(db, rng, &accounts.patients).await?;

    info!("Creating appointments...");
    summary.appointments = seed_appointments(db, rng, &accounts, &symptoms, &hospitals).await?;

    info!("Creating prescriptions...");
    summary.prescriptions = seed_prescriptions(db, rng, &accounts).await?;

    info!("Creating medical tests...");
    summary.medical_tests = seed_medical_tests(db, rng, &accounts, &hospitals).await?;

    let everyone = accounts.all();

    info!("Creating messages...");
    summary.messages = seed_messages(db, rng, &everyone).await?;

    info!("Creating notifications...");
    summary.notifications = seed_notifications(db, rng, &everyone).await?;

    info!("Creating actions...");
    summary.actions = seed_actions(db, rng, &everyone).await?;

    info!("Creating statistics...");
    summary.statistics = seed_statistics(db).await?;

    info!("Successfully populated database with sample data");
    Ok(summary)
}

fn random_sex(rng: &mut StdRng) -> Sex {
    if rng.gen_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    }
}

/// Next free numeric suffix for a role's generated usernames. A rerun picks
/// up numbering where the previous run stopped instead of colliding on the
/// UNIQUE username column.
async fn username_offset(db: &Database, role: AccountRole) -> AppResult<usize> {
    let count = db.count_accounts_by_role(role).await?;
    Ok(usize::try_from(count).unwrap_or(0))
}

async fn seed_accounts(
    db: &Database,
    rng: &mut StdRng,
    hospitals: &[Uuid],
    specialities: &[Uuid],
) -> AppResult<SeededAccounts> {
    let admin_hash = bcrypt::hash(ADMIN_PASSWORD, SEED_BCRYPT_COST)?;
    let doctor_hash = bcrypt::hash(DOCTOR_PASSWORD, SEED_BCRYPT_COST)?;
    let patient_hash = bcrypt::hash(PATIENT_PASSWORD, SEED_BCRYPT_COST)?;
    let lab_hash = bcrypt::hash(LAB_PASSWORD, SEED_BCRYPT_COST)?;
    let chemist_hash = bcrypt::hash(CHEMIST_PASSWORD, SEED_BCRYPT_COST)?;

    let admin_offset = username_offset(db, AccountRole::Admin).await?;
    let admin_username = if admin_offset == 0 {
        "admin_user".to_string()
    } else {
        format!("admin_user_{admin_offset}")
    };
    let profile = Profile {
        id: Uuid::new_v4(),
        firstname: "Admin".to_string(),
        lastname: "User".to_string(),
        sex: Sex::Male,
        birthday: date_of_birth(rng, 30, 60),
        phone: random_phone(rng),
        allergies: String::new(),
        pref_hospital: None,
        primary_care_doctor: None,
        speciality: None,
    };
    db.create_profile(&profile).await?;
    let account = Account::new(
        admin_username,
        "admin@clinic.com",
        admin_hash.as_str(),
        AccountRole::Admin,
        profile.id,
    );
    db.create_account(&account).await?;
    let admin = account.id;

    info!("Creating doctors...");
    let offset = username_offset(db, AccountRole::Doctor).await?;
    let mut doctors = Vec::with_capacity(DOCTORS);
    for i in 0..DOCTORS {
        let n = offset + i;
        let profile = Profile {
            id: Uuid::new_v4(),
            firstname: FirstName().fake_with_rng(rng),
            lastname: LastName().fake_with_rng(rng),
            sex: random_sex(rng),
            birthday: date_of_birth(rng, 25, 65),
            phone: random_phone(rng),
            allergies: String::new(),
            pref_hospital: Some(*pick(rng, hospitals)),
            primary_care_doctor: None,
            speciality: Some(*pick(rng, specialities)),
        };
        db.create_profile(&profile).await?;
        let account = Account::new(
            format!("doctor_{n}"),
            format!("doctor{n}@clinic.com"),
            doctor_hash.as_str(),
            AccountRole::Doctor,
            profile.id,
        );
        db.create_account(&account).await?;
        doctors.push(account.id);
    }

    info!("Creating patients...");
    let offset = username_offset(db, AccountRole::Patient).await?;
    let mut patients = Vec::with_capacity(PATIENTS);
    for i in 0..PATIENTS {
        let n = offset + i;
        let profile = Profile {
            id: Uuid::new_v4(),
            firstname: FirstName().fake_with_rng(rng),
            lastname: LastName().fake_with_rng(rng),
            sex: random_sex(rng),
            birthday: date_of_birth(rng, 18, 80),
            phone: random_phone(rng),
            allergies: (*pick(rng, fixtures::ALLERGIES)).to_string(),
            pref_hospital: Some(*pick(rng, hospitals)),
            primary_care_doctor: Some(*pick(rng, &doctors)),
            speciality: None,
        };
        db.create_profile(&profile).await?;
        let account = Account::new(
            format!("patient_{n}"),
            format!("patient{n}@clinic.com"),
            patient_hash.as_str(),
            AccountRole::Patient,
            profile.id,
        );
        db.create_account(&account).await?;
        patients.push(account.id);
    }

    info!("Creating lab accounts...");
    let offset = username_offset(db, AccountRole::Lab).await?;
    let mut lab_technicians = Vec::with_capacity(LAB_TECHNICIANS);
    for i in 0..LAB_TECHNICIANS {
        let n = offset + i;
        let profile = Profile {
            id: Uuid::new_v4(),
            firstname: FirstName().fake_with_rng(rng),
            lastname: LastName().fake_with_rng(rng),
            sex: random_sex(rng),
            birthday: date_of_birth(rng, 22, 60),
            phone: random_phone(rng),
            allergies: String::new(),
            pref_hospital: None,
            primary_care_doctor: None,
            speciality: None,
        };
        db.create_profile(&profile).await?;
        let account = Account::new(
            format!("lab_{n}"),
            format!("lab{n}@clinic.com"),
            lab_hash.as_str(),
            AccountRole::Lab,
            profile.id,
        );
        db.create_account(&account).await?;
        lab_technicians.push(account.id);
    }

    info!("Creating chemist accounts...");
    let offset = username_offset(db, AccountRole::Chemist).await?;
    let mut chemists = Vec::with_capacity(CHEMISTS);
    for i in 0..CHEMISTS {
        let n = offset + i;
        let profile = Profile {
            id: Uuid::new_v4(),
            firstname: FirstName().fake_with_rng(rng),
            lastname: LastName().fake_with_rng(rng),
            sex: random_sex(rng),
            birthday: date_of_birth(rng, 22, 60),
            phone: random_phone(rng),
            allergies: String::new(),
            pref_hospital: None,
            primary_care_doctor: None,
            speciality: None,
        };
        db.create_profile(&profile).await?;
        let account = Account::new(
            format!("chemist_{n}"),
            format!("chemist{n}@clinic.com"),
            chemist_hash.as_str(),
            AccountRole::Chemist,
            profile.id,
        );
        db.create_account(&account).await?;
        chemists.push(account.id);
    }

    Ok(SeededAccounts {
        admin,
        doctors,
        patients,
        lab_technicians,
        chemists,
    })
}

async fn seed_medical_info(
    db: &Database,
    rng: &mut StdRng,
    patients: &[Uuid],
) -> AppResult<usize> {
    let mut created = 0;
    for patient in patients {
        let info = MedicalInfo {
            id: Uuid::new_v4(),
            account: *patient,
            blood_type: (*pick(rng, fixtures::BLOOD_TYPES)).to_string(),
            allergy: (*pick(rng, fixtures::ALLERGIES)).to_string(),
            alzheimer: rng.gen_bool(0.5),
            asthma: rng.gen_bool(0.5),
            diabetes: rng.gen_bool(0.5),
            stroke: rng.gen_bool(0.5),
            comments: Paragraph(1..3).fake_with_rng(rng),
        };
        if db.ensure_medical_info(&info).await? {
            created += 1;
        }
    }
    Ok(created)
}

async fn seed_appointments(
    db: &Database,
    rng: &mut StdRng,
    accounts: &SeededAccounts,
    symptoms: &[Uuid],
    hospitals: &[Uuid],
) -> AppResult<usize> {
    for _ in 0..APPOINTMENTS {
        let start_time = date_time_this_year(rng);
        let appointment = Appointment {
            id: Uuid::new_v4(),
            doctor: *pick(rng, &accounts.doctors),
            patient: *pick(rng, &accounts.patients),
            description: Sentence(6..12).fake_with_rng(rng),
            symptom: *pick(rng, symptoms),
            status: *pick(rng, &AppointmentStatus::ALL),
            hospital: *pick(rng, hospitals),
            kind: *pick(rng, &AppointmentKind::ALL),
            start_time,
            end_time: start_time + Duration::minutes(30),
        };
        db.create_appointment(&appointment).await?;
    }
    Ok(APPOINTMENTS)
}

async fn seed_prescriptions(
    db: &Database,
    rng: &mut StdRng,
    accounts: &SeededAccounts,
) -> AppResult<usize> {
    for _ in 0..PRESCRIPTIONS {
        let prescription = Prescription {
            id: Uuid::new_v4(),
            patient: *pick(rng, &accounts.patients),
            doctor: *pick(rng, &accounts.doctors),
            date: date_this_year(rng),
            medication: (*pick(rng, fixtures::MEDICATIONS)).to_string(),
            strength: (*pick(rng, fixtures::STRENGTHS)).to_string(),
            instruction: (*pick(rng, fixtures::INSTRUCTIONS)).to_string(),
            refill: rng.gen_range(0..=3),
            active: rng.gen_bool(0.5),
        };
        db.create_prescription(&prescription).await?;
    }
    Ok(PRESCRIPTIONS)
}

async fn seed_medical_tests(
    db: &Database,
    rng: &mut StdRng,
    accounts: &SeededAccounts,
    hospitals: &[Uuid],
) -> AppResult<usize> {
    for _ in 0..MEDICAL_TESTS {
        let test = MedicalTest {
            id: Uuid::new_v4(),
            name: (*pick(rng, fixtures::TEST_NAMES)).to_string(),
            date: date_this_year(rng),
            hospital: *pick(rng, hospitals),
            description: Sentence(8..16).fake_with_rng(rng),
            doctor: *pick(rng, &accounts.doctors),
            patient: *pick(rng, &accounts.patients),
            private: rng.gen_bool(0.5),
            completed: rng.gen_bool(0.5),
        };
        db.create_medical_test(&test).await?;
    }
    Ok(MEDICAL_TESTS)
}

async fn seed_messages(db: &Database, rng: &mut StdRng, everyone: &[Uuid]) -> AppResult<usize> {
    for _ in 0..MESSAGES {
        let sender = *pick(rng, everyone);
        let mut target = *pick(rng, everyone);
        while target == sender {
            target = *pick(rng, everyone);
        }
        let message = Message {
            id: Uuid::new_v4(),
            target,
            sender,
            header: Sentence(4..7).fake_with_rng(rng),
            body: Paragraph(2..5).fake_with_rng(rng),
            timestamp: date_time_this_year(rng),
        };
        db.create_message(&message).await?;
    }
    Ok(MESSAGES)
}

async fn seed_notifications(
    db: &Database,
    rng: &mut StdRng,
    everyone: &[Uuid],
) -> AppResult<usize> {
    for _ in 0..NOTIFICATIONS {
        let notification = Notification {
            id: Uuid::new_v4(),
            account: *pick(rng, everyone),
            message: Sentence(8..12).fake_with_rng(rng),
            read: rng.gen_bool(0.5),
            sent_at: date_time_this_year(rng),
        };
        db.create_notification(&notification).await?;
    }
    Ok(NOTIFICATIONS)
}

async fn seed_actions(db: &Database, rng: &mut StdRng, everyone: &[Uuid]) -> AppResult<usize> {
    for _ in 0..ACTIONS {
        let action = Action {
            action_type: *pick(rng, &ActionType::ALL),
            description: (*pick(rng, fixtures::ACTION_DESCRIPTIONS)).to_string(),
            account: *pick(rng, everyone),
            performed_at: date_time_this_year(rng),
        };
        db.record_action(&action).await?;
    }
    Ok(ACTIONS)
}

async fn seed_statistics(db: &Database) -> AppResult<usize> {
    for month in 1..=STATISTICS_MONTHS {
        let start_date = NaiveDate::from_ymd_opt(2024, month, 1)
            .ok_or_else(|| AppError::invalid("statistics month", month.to_string()))?;
        let period = StatisticsPeriod {
            start_date,
            end_date: start_date + Duration::days(30),
        };
        db.create_statistics_period(period).await?;
    }
    Ok(STATISTICS_MONTHS as usize)
}
