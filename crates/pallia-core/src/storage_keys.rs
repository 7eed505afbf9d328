//! Object key conventions.
//!
//! Pure string functions — no storage-backend dependency. These define the
//! canonical layout of stored Pallia records.

use uuid::Uuid;

pub fn patient(id: Uuid) -> String {
    format!("patients/{id}.json")
}

pub const PATIENTS_PREFIX: &str = "patients/";

pub fn assessment(id: Uuid) -> String {
    format!("assessments/{id}.json")
}

pub fn patient_assessments_prefix(patient_id: Uuid) -> String {
    format!("assessments/by-patient/{patient_id}/")
}

pub fn patient_assessment(patient_id: Uuid, assessment_id: Uuid) -> String {
    format!("assessments/by-patient/{patient_id}/{assessment_id}.json")
}
