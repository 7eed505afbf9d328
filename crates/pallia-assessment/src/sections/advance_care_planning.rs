use crate::catalog::{AnswerDomain, Question, Section};

/// Section 7: advance care planning. Four ternary items.
pub(crate) fn section() -> Section {
    let items = [
        ("acp1", "Advance care planning discussion offered and documented"),
        ("acp2", "Resuscitation decision discussed and recorded"),
        ("acp3", "Preferred place of care recorded"),
        ("acp4", "Anticipatory medicines prescribed and available at home"),
    ];

    Section {
        id: 7,
        title: "Advance Care Planning".to_string(),
        items: items
            .iter()
            .map(|(id, label)| Question {
                id: (*id).to_string(),
                label: (*label).to_string(),
                domain: AnswerDomain::Ternary,
            })
            .collect(),
    }
}
