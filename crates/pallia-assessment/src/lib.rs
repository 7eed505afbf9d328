//! pallia-assessment
//!
//! The needs-assessment questionnaire and its scoring engine. Pure data and
//! pure functions — no database or HTTP dependency. Defines the seven-section
//! questionnaire, turns an answer set into section and overall scores, and
//! classifies the result into risk and concern bands.

pub mod answers;
pub mod catalog;
pub mod error;
pub mod scoring;
pub mod sections;
pub mod severity;
pub mod status;
pub mod summary;

use std::sync::LazyLock;

pub use answers::AnswerSet;
pub use catalog::{Question, Questionnaire, Section, SectionId};

/// The questionnaire definition, built once per process and never mutated.
pub fn questionnaire() -> &'static Questionnaire {
    static QUESTIONNAIRE: LazyLock<Questionnaire> = LazyLock::new(Questionnaire::build);
    &QUESTIONNAIRE
}
