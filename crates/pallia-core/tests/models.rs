use std::collections::HashMap;

use pallia_core::models::submission::AssessmentSubmission;
use pallia_core::storage_keys;
use uuid::Uuid;

#[test]
fn submission_serializes_with_camel_case_keys() {
    let submission = AssessmentSubmission {
        patient_id: Uuid::nil(),
        answers: HashMap::from([("fd1".to_string(), "yes".to_string())]),
        notes: String::new(),
    };

    let json = serde_json::to_value(&submission).unwrap();
    assert!(json.get("patientId").is_some());
    assert_eq!(json["answers"]["fd1"], "yes");
    assert_eq!(json["notes"], "");
}

#[test]
fn submission_round_trips() {
    let submission = AssessmentSubmission {
        patient_id: Uuid::new_v4(),
        answers: HashMap::from([
            ("sb1".to_string(), "no".to_string()),
            ("ru1".to_string(), "immediate".to_string()),
        ]),
        notes: "discussed with family".to_string(),
    };

    let json = serde_json::to_string(&submission).unwrap();
    let back: AssessmentSubmission = serde_json::from_str(&json).unwrap();
    assert_eq!(back.patient_id, submission.patient_id);
    assert_eq!(back.answers, submission.answers);
    assert_eq!(back.notes, submission.notes);
}

#[test]
fn storage_keys_layout() {
    let patient_id = Uuid::nil();
    let assessment_id = Uuid::nil();

    assert_eq!(
        storage_keys::patient(patient_id),
        format!("patients/{patient_id}.json")
    );
    assert_eq!(
        storage_keys::assessment(assessment_id),
        format!("assessments/{assessment_id}.json")
    );
    assert!(
        storage_keys::patient_assessment(patient_id, assessment_id)
            .starts_with(&storage_keys::patient_assessments_prefix(patient_id))
    );
    assert!(storage_keys::patient(patient_id).starts_with(storage_keys::PATIENTS_PREFIX));
}
