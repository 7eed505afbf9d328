use crate::catalog::{AnswerDomain, Question, Section};

/// Section 6: referral actions and their urgency. Six items, each answered
/// immediate / within-1-week / monitoring; only `"immediate"` scores.
pub(crate) fn section() -> Section {
    let items = [
        ("ru1", "Referral to specialist palliative care team"),
        ("ru2", "Referral to hospice or day therapy services"),
        ("ru3", "Review of anticipatory medicines"),
        ("ru4", "Advance care planning conversation"),
        ("ru5", "Referral for carer support"),
        ("ru6", "GP or district nurse review"),
    ];

    Section {
        id: 6,
        title: "Referral & Urgency".to_string(),
        items: items
            .iter()
            .map(|(id, label)| Question {
                id: (*id).to_string(),
                label: (*label).to_string(),
                domain: AnswerDomain::Urgency,
            })
            .collect(),
    }
}
