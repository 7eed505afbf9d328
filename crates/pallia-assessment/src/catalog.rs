//! Questionnaire structure: sections, questions, and answer domains.
//!
//! The catalog is static data. Sections are numbered 1–7 and hold an ordered
//! item list; section 3 additionally partitions its items into condition
//! categories for display, keyed by a prefix embedded in each question id.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AssessmentError;
use crate::sections;

/// Section identifier, 1–7.
pub type SectionId = u8;

/// The section whose items are grouped by condition category.
pub const CONDITION_SECTION: SectionId = 3;

/// Condition categories for section 3, in display order. Each question id in
/// that section starts with one of these alphabetic prefixes.
const CONDITION_CATEGORIES: &[(&str, &str)] = &[
    ("c", "Cancer"),
    ("d", "Dementia/Frailty"),
    ("n", "Neurological"),
    ("h", "Heart/Vascular"),
    ("r", "Respiratory"),
    ("re", "Renal"),
    ("l", "Liver"),
];

/// The answer domain a question accepts. Each domain names the single value
/// that counts toward the section score; everything else, including strings
/// outside the domain, scores zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind")]
#[ts(export)]
pub enum AnswerDomain {
    /// yes / no / unclear.
    Ternary,
    /// Per-question dropdown options (section 5).
    Dropdown { options: Vec<String> },
    /// immediate / within-1-week / monitoring (section 6).
    Urgency,
}

impl AnswerDomain {
    /// The answer string that scores one point. Matching is exact and
    /// case-sensitive: the dropdown domain uses capitalized `"Yes"` while the
    /// ternary domain uses lowercase `"yes"`.
    pub fn positive_value(&self) -> &str {
        match self {
            AnswerDomain::Ternary => "yes",
            AnswerDomain::Dropdown { .. } => "Yes",
            AnswerDomain::Urgency => "immediate",
        }
    }

    /// The full option list, for rendering.
    pub fn options(&self) -> Vec<String> {
        match self {
            AnswerDomain::Ternary => {
                vec!["yes".to_string(), "no".to_string(), "unclear".to_string()]
            }
            AnswerDomain::Dropdown { options } => options.clone(),
            AnswerDomain::Urgency => vec![
                "immediate".to_string(),
                "within-1-week".to_string(),
                "monitoring".to_string(),
            ],
        }
    }

    /// Whether `value` is a member of this domain.
    pub fn contains(&self, value: &str) -> bool {
        self.options().iter().any(|option| option == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Stable key, unique across the whole questionnaire.
    pub id: String,
    pub label: String,
    pub domain: AnswerDomain,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub items: Vec<Question>,
}

/// A display grouping of section-3 items by condition category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionGroup {
    pub title: String,
    pub items: Vec<Question>,
}

impl Section {
    /// Display groups for the condition-specific section: the flat item list
    /// partitioned by question-id prefix, with the `"Category: "` label
    /// prefix stripped. Any other section comes back as a single group
    /// holding its items unchanged.
    pub fn condition_groups(&self) -> Vec<ConditionGroup> {
        if self.id != CONDITION_SECTION {
            return vec![ConditionGroup {
                title: self.title.clone(),
                items: self.items.clone(),
            }];
        }

        CONDITION_CATEGORIES
            .iter()
            .map(|(prefix, title)| ConditionGroup {
                title: (*title).to_string(),
                items: self
                    .items
                    .iter()
                    .filter(|question| id_prefix(&question.id) == *prefix)
                    .map(|question| Question {
                        id: question.id.clone(),
                        label: question
                            .label
                            .strip_prefix(&format!("{title}: "))
                            .unwrap_or(&question.label)
                            .to_string(),
                        domain: question.domain.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// The alphabetic prefix of a question id (`"re2"` → `"re"`). Exact matching
/// on the whole prefix keeps `re` (Renal) out of `r` (Respiratory).
fn id_prefix(id: &str) -> &str {
    let end = id
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(id.len());
    &id[..end]
}

/// The full questionnaire: seven sections in fixed order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Questionnaire {
    sections: Vec<Section>,
}

impl Questionnaire {
    pub(crate) fn build() -> Self {
        Self {
            sections: vec![
                sections::functional_decline::section(),
                sections::symptom_burden::section(),
                sections::condition_indicators::section(),
                sections::care_needs::section(),
                sections::psychosocial::section(),
                sections::referral_urgency::section(),
                sections::advance_care_planning::section(),
            ],
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn require_section(&self, id: SectionId) -> Result<&Section, AssessmentError> {
        self.section(id).ok_or(AssessmentError::UnknownSection(id))
    }

    /// Look up a question anywhere in the questionnaire by its stable key.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.sections
            .iter()
            .flat_map(|section| &section.items)
            .find(|question| question.id == id)
    }

    pub fn require_question(&self, id: &str) -> Result<&Question, AssessmentError> {
        self.question(id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(id.to_string()))
    }

    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }
}
