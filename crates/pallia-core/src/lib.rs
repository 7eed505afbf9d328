//! pallia-core
//!
//! Pure domain types and storage key conventions for the Pallia
//! needs-assessment dashboard. No HTTP or database dependency — this is the
//! shared vocabulary of the system.

pub mod error;
pub mod models;
pub mod storage_keys;
