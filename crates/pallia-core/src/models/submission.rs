use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The payload handed to the persistence layer when an assessment is
/// submitted: raw question-id → answer-string pairs plus free-text notes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentSubmission {
    pub patient_id: Uuid,
    pub answers: HashMap<String, String>,
    pub notes: String,
}

/// A stored assessment. Scores and risk bands are never persisted — they are
/// recomputed from the answers on every read.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub answers: HashMap<String, String>,
    pub notes: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
