use crate::catalog::{AnswerDomain, Question, Section};

/// Section 4: current care needs and service utilisation. Six ternary items.
pub(crate) fn section() -> Section {
    let items = [
        ("cu1", "Current package of care no longer meets day-to-day needs"),
        ("cu2", "Main carer is struggling to continue providing care"),
        ("cu3", "Needs equipment or home adaptations that are not yet in place"),
        ("cu4", "Requires care or supervision overnight"),
        ("cu5", "Receiving district nursing or community team visits"),
        ("cu6", "Recent increase in GP, out-of-hours, or emergency contacts"),
    ];

    Section {
        id: 4,
        title: "Care Needs & Utilisation".to_string(),
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
