// ABOUTME: Core data models for the VirtualClinic schema
// ABOUTME: Defines accounts, profiles, clinical records and their enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

//! # Data Models
//!
//! Typed rows for every table the seeding tools write, plus the string-backed
//! enumerations the schema stores as TEXT. Enum values round-trip through
//! `as_str`/`FromStr` so the database layer never deals in raw strings.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Role attached to a clinic account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Administrative staff
    Admin,
    /// Practicing doctor
    Doctor,
    /// Registered patient
    Patient,
    /// Laboratory technician
    Lab,
    /// Pharmacy chemist
    Chemist,
}

impl AccountRole {
    /// Stable string form stored in the `accounts.role` column
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Patient => "patient",
            Self::Lab => "lab",
            Self::Chemist => "chemist",
        }
    }
}

impl Display for AccountRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "doctor" => Ok(Self::Doctor),
            "patient" => Ok(Self::Patient),
            "lab" => Ok(Self::Lab),
            "chemist" => Ok(Self::Chemist),
            other => Err(AppError::invalid("account role", other)),
        }
    }
}

/// Sex recorded on a profile, stored as a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    /// Stored as `M`
    Male,
    /// Stored as `F`
    Female,
}

impl Sex {
    /// Single-character column form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            other => Err(AppError::invalid("sex", other)),
        }
    }
}

/// Lifecycle state of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    /// Booked and upcoming
    Active,
    /// Took place
    Completed,
    /// Called off by either party
    Cancelled,
}

impl AppointmentStatus {
    /// Column form, capitalized as the web frontend displays it
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// All states, for uniform random sampling
    pub const ALL: [Self; 3] = [Self::Active, Self::Completed, Self::Cancelled];
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(AppError::invalid("appointment status", other)),
        }
    }
}

/// How an appointment is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentKind {
    /// In-person visit at a hospital
    Offline,
    /// Video consultation
    Online,
}

impl AppointmentKind {
    /// Column form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "Offline",
            Self::Online => "Online",
        }
    }

    /// Both kinds, for uniform random sampling
    pub const ALL: [Self; 2] = [Self::Offline, Self::Online];
}

impl Display for AppointmentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Offline" => Ok(Self::Offline),
            "Online" => Ok(Self::Online),
            other => Err(AppError::invalid("appointment kind", other)),
        }
    }
}

/// Category of an activity-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Account registered, archived or restored
    Account,
    /// Profile fields changed
    Profile,
    /// Appointment booked or cancelled
    Appointment,
    /// Prescription issued or withdrawn
    Prescription,
    /// Medical test uploaded or completed
    MedicalTest,
    /// Message sent
    Message,
    /// Medical information updated
    MedicalInfo,
    /// Administrative operation
    Admin,
}

impl ActionType {
    /// Column form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Profile => "profile",
            Self::Appointment => "appointment",
            Self::Prescription => "prescription",
            Self::MedicalTest => "medical_test",
            Self::Message => "message",
            Self::MedicalInfo => "medical_info",
            Self::Admin => "admin",
        }
    }

    /// Every category, for uniform random sampling
    pub const ALL: [Self; 8] = [
        Self::Account,
        Self::Profile,
        Self::Appointment,
        Self::Prescription,
        Self::MedicalTest,
        Self::Message,
        Self::MedicalInfo,
        Self::Admin,
    ];
}

impl Display for ActionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account" => Ok(Self::Account),
            "profile" => Ok(Self::Profile),
            "appointment" => Ok(Self::Appointment),
            "prescription" => Ok(Self::Prescription),
            "medical_test" => Ok(Self::MedicalTest),
            "message" => Ok(Self::Message),
            "medical_info" => Ok(Self::MedicalInfo),
            "admin" => Ok(Self::Admin),
            other => Err(AppError::invalid("action type", other)),
        }
    }
}

/// Demographic profile attached to an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Row id
    pub id: Uuid,
    /// Given name
    pub firstname: String,
    /// Family name
    pub lastname: String,
    /// Recorded sex
    pub sex: Sex,
    /// Date of birth
    pub birthday: NaiveDate,
    /// Contact phone, digits only
    pub phone: String,
    /// Free-text allergy note, empty when none recorded
    pub allergies: String,
    /// Preferred hospital, if any
    pub pref_hospital: Option<Uuid>,
    /// Primary-care doctor account, for patients
    pub primary_care_doctor: Option<Uuid>,
    /// Medical speciality, for doctors
    pub speciality: Option<Uuid>,
}

/// Login account tied to a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Row id
    pub id: Uuid,
    /// Unique login name
    pub username: String,
    /// Contact email
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Role this account acts in
    pub role: AccountRole,
    /// Attached profile
    pub profile_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a fresh id, created now
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: AccountRole,
        profile_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role,
            profile_id,
            created_at: Utc::now(),
        }
    }
}

/// Scheduled consultation between a doctor and a patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    /// Row id
    pub id: Uuid,
    /// Doctor account
    pub doctor: Uuid,
    /// Patient account
    pub patient: Uuid,
    /// Reason for the visit
    pub description: String,
    /// Presenting symptom
    pub symptom: Uuid,
    /// Lifecycle state
    pub status: AppointmentStatus,
    /// Where the appointment is held
    pub hospital: Uuid,
    /// In-person or video
    pub kind: AppointmentKind,
    /// Scheduled start
    pub start_time: DateTime<Utc>,
    /// Scheduled end
    pub end_time: DateTime<Utc>,
}

/// Medication prescribed by a doctor to a patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    /// Row id
    pub id: Uuid,
    /// Patient account
    pub patient: Uuid,
    /// Prescribing doctor account
    pub doctor: Uuid,
    /// Date of issue
    pub date: NaiveDate,
    /// Medication name
    pub medication: String,
    /// Dose strength, e.g. `500mg`
    pub strength: String,
    /// Dosage instruction
    pub instruction: String,
    /// Remaining refills
    pub refill: i64,
    /// Whether the prescription is currently active
    pub active: bool,
}

/// Ordered medical test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalTest {
    /// Row id
    pub id: Uuid,
    /// Test name, e.g. `Blood Test`
    pub name: String,
    /// Date the test is (or was) taken
    pub date: NaiveDate,
    /// Hospital performing the test
    pub hospital: Uuid,
    /// Free-text notes
    pub description: String,
    /// Ordering doctor account
    pub doctor: Uuid,
    /// Patient account
    pub patient: Uuid,
    /// Hidden from the patient's shared record
    pub private: bool,
    /// Results are in
    pub completed: bool,
}

/// Standing medical information for a patient, one row per account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalInfo {
    /// Row id
    pub id: Uuid,
    /// Patient account
    pub account: Uuid,
    /// Blood type, e.g. `O+`
    pub blood_type: String,
    /// Known allergy
    pub allergy: String,
    /// Alzheimer's diagnosis on record
    pub alzheimer: bool,
    /// Asthma diagnosis on record
    pub asthma: bool,
    /// Diabetes diagnosis on record
    pub diabetes: bool,
    /// Stroke history on record
    pub stroke: bool,
    /// Free-text notes
    pub comments: String,
}

/// Direct message between two accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Row id
    pub id: Uuid,
    /// Receiving account
    pub target: Uuid,
    /// Sending account, never equal to `target`
    pub sender: Uuid,
    /// Subject line
    pub header: String,
    /// Message body
    pub body: String,
    /// Send time
    pub timestamp: DateTime<Utc>,
}

/// In-app notification for a single account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Row id
    pub id: Uuid,
    /// Receiving account
    pub account: Uuid,
    /// Notification text
    pub message: String,
    /// Whether the account has seen it
    pub read: bool,
    /// Delivery time
    pub sent_at: DateTime<Utc>,
}

/// Activity-log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Category of the activity
    pub action_type: ActionType,
    /// Human-readable description
    pub description: String,
    /// Account the activity belongs to
    pub account: Uuid,
    /// When it happened
    pub performed_at: DateTime<Utc>,
}

/// Reporting period for aggregate statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatisticsPeriod {
    /// First day of the period
    pub start_date: NaiveDate,
    /// Last day of the period
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [
            AccountRole::Admin,
            AccountRole::Doctor,
            AccountRole::Patient,
            AccountRole::Lab,
            AccountRole::Chemist,
        ] {
            assert_eq!(role.as_str().parse::<AccountRole>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("nurse".parse::<AccountRole>().is_err());
    }

    #[test]
    fn action_type_round_trips_through_str() {
        for action in ActionType::ALL {
            assert_eq!(action.as_str().parse::<ActionType>().unwrap(), action);
        }
    }

    #[test]
    fn account_new_sets_fresh_identity() {
        let profile_id = Uuid::new_v4();
        let a = Account::new("doc", "doc@clinic.com", "hash", AccountRole::Doctor, profile_id);
        let b = Account::new("doc2", "doc2@clinic.com", "hash", AccountRole::Doctor, profile_id);
        assert_ne!(a.id, b.id);
        assert_eq!(a.role, AccountRole::Doctor);
        assert_eq!(a.profile_id, profile_id);
    }
}
