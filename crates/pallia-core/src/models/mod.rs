pub mod patient;
pub mod submission;
