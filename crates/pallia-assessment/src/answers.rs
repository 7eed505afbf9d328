//! One assessment's answers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pallia_core::models::submission::AssessmentSubmission;

use crate::catalog::Questionnaire;

/// Question id mapped to the raw answer string. Unanswered questions are
/// simply absent — there is no explicit "unanswered" sentinel. Values outside
/// a question's domain are kept as recorded and never score; `validate`
/// reports them without affecting scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet(HashMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous answer to the same question.
    pub fn record(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    /// Whether any value is recorded for the question, regardless of value.
    pub fn answered(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lift the answers out of a submission payload.
    pub fn from_submission(submission: &AssessmentSubmission) -> Self {
        Self(submission.answers.clone())
    }

    /// Advisory check against the questionnaire: reports answers whose
    /// question id is unknown or whose value is outside the question's
    /// domain, sorted by question id. Scoring never consults this — the
    /// engine silently ignores anything that does not match a positive
    /// value.
    pub fn validate(&self, questionnaire: &Questionnaire) -> Vec<AnswerViolation> {
        let mut violations: Vec<AnswerViolation> = self
            .0
            .iter()
            .filter_map(|(id, value)| {
                let reason = match questionnaire.question(id) {
                    None => ViolationReason::UnknownQuestion,
                    Some(question) if !question.domain.contains(value) => {
                        ViolationReason::OutOfDomain
                    }
                    Some(_) => return None,
                };
                Some(AnswerViolation {
                    question_id: id.clone(),
                    value: value.clone(),
                    reason,
                })
            })
            .collect();
        violations.sort_by(|a, b| a.question_id.cmp(&b.question_id));
        violations
    }
}

impl From<HashMap<String, String>> for AnswerSet {
    fn from(answers: HashMap<String, String>) -> Self {
        Self(answers)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerViolation {
    pub question_id: String,
    pub value: String,
    pub reason: ViolationReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ViolationReason {
    UnknownQuestion,
    OutOfDomain,
}
