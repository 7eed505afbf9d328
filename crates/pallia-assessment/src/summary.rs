//! The decision-support summary: everything the dashboard needs to render an
//! assessment result in one pass — the top-line risk banner plus one row per
//! section with its score, concern band, and completion status.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::answers::AnswerSet;
use crate::catalog::{Questionnaire, SectionId};
use crate::scoring::section_score;
use crate::severity::{concern_level, risk_level, ConcernLevel, RiskLevel};
use crate::status::{section_status, SectionStatus};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub overall_score: u32,
    pub overall_total: u32,
    pub risk: RiskLevel,
    pub sections: Vec<SectionSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionSummary {
    pub id: SectionId,
    pub title: String,
    pub score: u32,
    pub total: u32,
    pub concern: ConcernLevel,
    pub status: SectionStatus,
}

pub fn summarize(questionnaire: &Questionnaire, answers: &AnswerSet) -> AssessmentSummary {
    let sections: Vec<SectionSummary> = questionnaire
        .sections()
        .iter()
        .map(|section| {
            let score = section_score(section, answers);
            let total = section.items.len() as u32;
            let answered = section
                .items
                .iter()
                .filter(|question| answers.answered(&question.id))
                .count();
            SectionSummary {
                id: section.id,
                title: section.title.clone(),
                score,
                total,
                concern: concern_level(score, total),
                status: section_status(answered, section.items.len()),
            }
        })
        .collect();

    let overall_score = sections.iter().map(|section| section.score).sum();
    let overall_total = sections.iter().map(|section| section.total).sum();

    AssessmentSummary {
        overall_score,
        overall_total,
        risk: risk_level(overall_score, overall_total),
        sections,
    }
}
