use thiserror::Error;

use crate::catalog::SectionId;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("unknown section: {0}")]
    UnknownSection(SectionId),

    #[error("unknown question: '{0}'")]
    UnknownQuestion(String),
}
