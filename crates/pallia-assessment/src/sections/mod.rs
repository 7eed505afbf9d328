pub mod advance_care_planning;
pub mod care_needs;
pub mod condition_indicators;
pub mod functional_decline;
pub mod psychosocial;
pub mod referral_urgency;
pub mod symptom_burden;
