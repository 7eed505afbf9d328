use crate::catalog::{AnswerDomain, Question, Section};

/// Section 5: psychosocial and family circumstances. Eight items, each with
/// its own dropdown option set. Note the capitalized option spellings — the
/// dropdown domain scores on `"Yes"`, not the ternary `"yes"`, and the
/// carer-strain item has no scoring option at all.
pub(crate) fn section() -> Section {
    let items: [(&str, &str, &[&str]); 8] = [
        (
            "ps1",
            "Patient is aware of their prognosis",
            &["Yes", "No", "Unclear"],
        ),
        (
            "ps2",
            "Family members are aware of the prognosis",
            &["Yes", "No", "Unclear"],
        ),
        (
            "ps3",
            "Patient reports feeling low, anxious, or distressed",
            &["Yes", "No", "Sometimes"],
        ),
        (
            "ps4",
            "Level of strain on the family or main carer",
            &["None", "Mild concerns", "Significant strain"],
        ),
        (
            "ps5",
            "Financial or practical concerns affecting care",
            &["Yes", "No", "Sometimes"],
        ),
        (
            "ps6",
            "Spiritual or religious support needs identified",
            &["Yes", "No", "Unclear"],
        ),
        (
            "ps7",
            "Concerns about dependents in the patient's care",
            &["Yes", "No", "Unclear"],
        ),
        (
            "ps8",
            "Socially isolated or lacking informal support",
            &["Yes", "No", "Sometimes"],
        ),
    ];

    Section {
        id: 5,
        title: "Psychosocial & Family".to_string(),
        items: items
            .iter()
            .map(|(id, label, options)| Question {
                id: (*id).to_string(),
                label: (*label).to_string(),
                domain: AnswerDomain::Dropdown {
                    options: options.iter().map(|option| (*option).to_string()).collect(),
                },
            })
            .collect(),
    }
}
