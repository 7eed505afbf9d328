//! Threshold-based severity classification over a score/total ratio.
//!
//! Two fixed scales: the four-level overall risk band shown in the dashboard
//! banner, and the three-level per-section concern band used in the
//! decision-support summary. Nothing here is persisted; bands are recomputed
//! from the ratio on every read.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConcernLevel {
    Low,
    Moderate,
    High,
}

fn ratio(score: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(score) / f64::from(total)
    }
}

/// Overall band: ratio ≥ 0.8 critical, ≥ 0.6 high, ≥ 0.3 moderate, else low.
/// A zero total counts as ratio 0, so an empty questionnaire is low risk.
pub fn risk_level(score: u32, total: u32) -> RiskLevel {
    let ratio = ratio(score, total);
    if ratio >= 0.8 {
        RiskLevel::Critical
    } else if ratio >= 0.6 {
        RiskLevel::High
    } else if ratio >= 0.3 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Per-section band: ratio ≥ 0.66 high, ≥ 0.33 moderate, else low.
pub fn concern_level(score: u32, total: u32) -> ConcernLevel {
    let ratio = ratio(score, total);
    if ratio >= 0.66 {
        ConcernLevel::High
    } else if ratio >= 0.33 {
        ConcernLevel::Moderate
    } else {
        ConcernLevel::Low
    }
}
