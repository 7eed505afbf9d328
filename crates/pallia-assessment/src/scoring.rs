//! The scoring engine: answer set in, section and overall scores out.
//!
//! Pure and total. Absent answers, negative answers, and strings outside a
//! question's domain all contribute zero; there is no error path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::answers::AnswerSet;
use crate::catalog::{Questionnaire, Section, SectionId};

/// Section and overall scores for one answer set. Totals are flat item
/// counts — section 3 counts its sixteen items, not its seven display
/// groups — so score/total is always a ratio in [0, 1].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    pub section_scores: BTreeMap<SectionId, u32>,
    pub section_totals: BTreeMap<SectionId, u32>,
    pub overall_score: u32,
    pub overall_total: u32,
}

impl ScoreReport {
    /// Score and total for one section; (0, 0) for an unknown id.
    pub fn section(&self, id: SectionId) -> (u32, u32) {
        (
            self.section_scores.get(&id).copied().unwrap_or(0),
            self.section_totals.get(&id).copied().unwrap_or(0),
        )
    }
}

/// Score an answer set against the questionnaire.
///
/// Each section counts the items whose recorded answer exactly equals the
/// question domain's positive value: `"yes"` for ternary sections, `"Yes"`
/// for the dropdown section, `"immediate"` for the urgency section.
pub fn score(questionnaire: &Questionnaire, answers: &AnswerSet) -> ScoreReport {
    let mut section_scores = BTreeMap::new();
    let mut section_totals = BTreeMap::new();

    for section in questionnaire.sections() {
        section_scores.insert(section.id, section_score(section, answers));
        section_totals.insert(section.id, section.items.len() as u32);
    }

    ScoreReport {
        overall_score: section_scores.values().sum(),
        overall_total: section_totals.values().sum(),
        section_scores,
        section_totals,
    }
}

pub(crate) fn section_score(section: &Section, answers: &AnswerSet) -> u32 {
    section
        .items
        .iter()
        .filter(|question| answers.get(&question.id) == Some(question.domain.positive_value()))
        .count() as u32
}
