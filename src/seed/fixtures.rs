// ABOUTME: Fixture data for the clinic seeders
// ABOUTME: Fixed candidate lists that randomized records draw from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers

/// One of the four sample prescriptions the standalone seeder inserts
pub struct SamplePrescription {
    /// Medication name
    pub medication: &'static str,
    /// Dose strength
    pub strength: &'static str,
    /// Dosage instruction
    pub instruction: &'static str,
    /// Refill count
    pub refill: i64,
}

/// Sample prescriptions for `seed-prescriptions`
pub const SAMPLE_PRESCRIPTIONS: [SamplePrescription; 4] = [
    SamplePrescription {
        medication: "Aspirin",
        strength: "500mg",
        instruction: "Take twice daily after meals",
        refill: 3,
    },
    SamplePrescription {
        medication: "Amoxicillin",
        strength: "250mg",
        instruction: "Take three times daily for 7 days",
        refill: 0,
    },
    SamplePrescription {
        medication: "Metformin",
        strength: "1000mg",
        instruction: "Take once daily in the morning",
        refill: 5,
    },
    SamplePrescription {
        medication: "Lisinopril",
        strength: "10mg",
        instruction: "Take once daily in the morning",
        refill: 12,
    },
];

/// Medical specialities as (name, description)
pub const SPECIALITIES: &[(&str, &str)] = &[
    ("Cardiology", "Heart and cardiovascular diseases"),
    ("Neurology", "Brain and nervous system"),
    ("Orthopedics", "Bones and joints"),
    ("Dermatology", "Skin diseases"),
    ("Pediatrics", "Child medicine"),
    ("Psychiatry", "Mental health"),
    ("General Practice", "General medical care"),
    ("Surgery", "Surgical procedures"),
    ("ENT", "Ear, nose, throat"),
    ("Ophthalmology", "Eye care"),
];

/// Presenting symptoms as (name, description)
pub const SYMPTOMS: &[(&str, &str)] = &[
    ("Headache", "Persistent head pain"),
    ("Fever", "High body temperature"),
    ("Cough", "Persistent coughing"),
    ("Fatigue", "General tiredness"),
    ("Chest Pain", "Pain in chest area"),
    ("Dizziness", "Feeling of lightheadedness"),
    ("Nausea", "Feeling sick"),
    ("Vomiting", "Ejecting stomach contents"),
    ("Joint Pain", "Pain in joints"),
    ("Back Pain", "Pain in back region"),
    ("Sore Throat", "Throat pain"),
    ("Rash", "Skin irritation"),
    ("Anxiety", "Feeling nervous"),
    ("Insomnia", "Sleep disorder"),
    ("Shortness of Breath", "Difficulty breathing"),
];

/// Cities as (city, zip, state); the country is fixed
pub const CITIES: &[(&str, &str, &str)] = &[
    ("Mumbai", "400001", "Maharashtra"),
    ("Delhi", "110001", "Delhi"),
    ("Bangalore", "560001", "Karnataka"),
    ("Chennai", "600001", "Tamil Nadu"),
    ("Kolkata", "700001", "West Bengal"),
    ("Hyderabad", "500001", "Telangana"),
    ("Pune", "411001", "Maharashtra"),
    ("Ahmedabad", "380001", "Gujarat"),
    ("Jaipur", "302001", "Rajasthan"),
    ("Lucknow", "226001", "Uttar Pradesh"),
];

/// Country for every seeded location
pub const COUNTRY: &str = "India";

/// Hospital names, assigned round-robin over the seeded locations
pub const HOSPITAL_NAMES: &[&str] = &[
    "Apollo Hospital",
    "Fortis Hospital",
    "Max Hospital",
    "Manipal Hospital",
    "Medanta Hospital",
    "AIIMS",
    "Ruby Hall Clinic",
    "Lilavati Hospital",
    "Jaslok Hospital",
    "Sir H.N. Reliance Foundation Hospital",
];

/// Medications sampled by the populator
pub const MEDICATIONS: &[&str] = &[
    "Aspirin",
    "Ibuprofen",
    "Paracetamol",
    "Amoxicillin",
    "Ciprofloxacin",
    "Metformin",
    "Lisinopril",
    "Atorvastatin",
    "Vitamin D",
    "Omeprazole",
];

/// Dose strengths sampled by the populator
pub const STRENGTHS: &[&str] = &["250mg", "500mg", "1000mg", "5mg", "10mg"];

/// Dosage instructions sampled by the populator
pub const INSTRUCTIONS: &[&str] = &[
    "Take twice daily",
    "Take once daily",
    "Take before food",
    "Take after food",
];

/// Medical test names sampled by the populator
pub const TEST_NAMES: &[&str] = &[
    "Blood Test",
    "X-Ray",
    "CT Scan",
    "MRI",
    "Ultrasound",
    "ECG",
    "EEG",
    "Endoscopy",
    "Biopsy",
    "Glucose Test",
];

/// Activity-log descriptions sampled by the populator
pub const ACTION_DESCRIPTIONS: &[&str] = &[
    "Created new account",
    "Updated profile",
    "Created appointment",
    "Cancelled appointment",
    "Uploaded prescription",
    "Completed medical test",
    "Sent message",
    "Updated medical information",
    "Archived account",
    "Restored account",
];

/// Blood types sampled for medical info
pub const BLOOD_TYPES: &[&str] = &["A+", "B+", "AB+", "O+", "A-", "B-", "AB-", "O-"];

/// Allergies sampled for profiles and medical info
pub const ALLERGIES: &[&str] = &["Penicillin", "Peanuts", "None", "Shellfish"];
