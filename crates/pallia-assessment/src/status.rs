//! Per-section completion status for the progress stepper.
//!
//! Completion is independent of score: a question counts as answered when
//! any value is recorded for it, whatever the value. Every section is
//! measured against its flat item count — section 3 against its sixteen
//! items, not its seven display groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::answers::AnswerSet;
use crate::catalog::{Questionnaire, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SectionStatus {
    Empty,
    InProgress,
    Complete,
}

pub fn section_status(answered: usize, total: usize) -> SectionStatus {
    if answered == 0 {
        SectionStatus::Empty
    } else if answered < total {
        SectionStatus::InProgress
    } else {
        SectionStatus::Complete
    }
}

pub fn completion(
    questionnaire: &Questionnaire,
    answers: &AnswerSet,
) -> BTreeMap<SectionId, SectionStatus> {
    questionnaire
        .sections()
        .iter()
        .map(|section| {
            let answered = section
                .items
                .iter()
                .filter(|question| answers.answered(&question.id))
                .count();
            (section.id, section_status(answered, section.items.len()))
        })
        .collect()
}
