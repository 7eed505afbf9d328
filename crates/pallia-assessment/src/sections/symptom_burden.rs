use crate::catalog::{AnswerDomain, Question, Section};

/// Section 2: current symptom burden. Seven ternary items.
pub(crate) fn section() -> Section {
    let items = [
        ("sb1", "Pain that is poorly controlled or limits daily activity"),
        ("sb2", "Breathlessness at rest or on minimal exertion"),
        ("sb3", "Persistent fatigue or weakness"),
        ("sb4", "Poor appetite, nausea, or unintended weight loss"),
        ("sb5", "Low mood, anxiety, or distress"),
        ("sb6", "Sleep regularly disturbed by symptoms"),
        ("sb7", "New or worsening confusion or agitation"),
    ];

    Section {
        id: 2,
        title: "Symptom Burden".to_string(),
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
