use crate::catalog::{AnswerDomain, Question, Section};

/// Section 3: condition-specific clinical indicators. Sixteen ternary items
/// across seven condition categories. The category is encoded as the
/// alphabetic question-id prefix and repeated in the label so the flat list
/// is readable on its own; `Section::condition_groups` strips the label
/// prefix when rendering grouped.
pub(crate) fn section() -> Section {
    let items = [
        (
            "c1",
            "Cancer: Functional ability deteriorating due to progressive cancer",
        ),
        (
            "c2",
            "Cancer: Too frail for cancer treatment, or treatment is now for symptom control",
        ),
        (
            "c3",
            "Cancer: Persistent symptoms despite palliative oncology treatment",
        ),
        (
            "d1",
            "Dementia/Frailty: Unable to dress, walk, or eat without help",
        ),
        (
            "d2",
            "Dementia/Frailty: Eating and drinking less, or difficulty swallowing",
        ),
        (
            "d3",
            "Dementia/Frailty: Recurrent infections or febrile episodes, including aspiration pneumonia",
        ),
        (
            "n1",
            "Neurological: Progressive deterioration in physical or cognitive function despite optimal therapy",
        ),
        (
            "n2",
            "Neurological: Increasing difficulty with speech, communication, or swallowing",
        ),
        (
            "h1",
            "Heart/Vascular: Heart failure or extensive coronary disease with breathlessness or chest pain at rest or on minimal exertion",
        ),
        (
            "h2",
            "Heart/Vascular: Severe inoperable peripheral vascular disease",
        ),
        (
            "r1",
            "Respiratory: Severe chronic lung disease with breathlessness at rest or on minimal exertion between exacerbations",
        ),
        (
            "r2",
            "Respiratory: Needs long-term oxygen therapy",
        ),
        (
            "re1",
            "Renal: Stage 4 or 5 chronic kidney disease with deteriorating health",
        ),
        (
            "re2",
            "Renal: Stopping dialysis, or choosing not to start it",
        ),
        (
            "l1",
            "Liver: Advanced cirrhosis with one or more complications in the past year",
        ),
        (
            "l2",
            "Liver: Liver transplant is not possible",
        ),
    ];

    Section {
        id: 3,
        title: "Condition-Specific Indicators".to_string(),
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
