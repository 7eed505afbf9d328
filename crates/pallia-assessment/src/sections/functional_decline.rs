use crate::catalog::{AnswerDomain, Question, Section};

/// Section 1: general indicators of deteriorating health and functional
/// decline over the past six months. Six ternary items.
pub(crate) fn section() -> Section {
    let items = [
        (
            "fd1",
            "Performance status is poor or deteriorating (in bed or a chair for more than half the day)",
        ),
        (
            "fd2",
            "Needs help from others for most activities of daily living",
        ),
        (
            "fd3",
            "Two or more unplanned hospital admissions in the past six months",
        ),
        (
            "fd4",
            "Significant weight loss (5-10%) over the past six months, or persistently low body mass index",
        ),
        (
            "fd5",
            "Persistent troublesome symptoms despite optimal treatment of underlying conditions",
        ),
        (
            "fd6",
            "Lives in a nursing or residential care home, or needs ongoing care to remain at home",
        ),
    ];

    Section {
        id: 1,
        title: "Functional Decline".to_string(),
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
