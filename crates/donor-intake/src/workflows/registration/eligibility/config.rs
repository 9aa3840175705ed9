use serde::{Deserialize, Serialize};

/// Thresholds backing the eligibility rule. The age floor here is 19 and
/// calendar-precise, intentionally distinct from the wizard's year-naive
/// 18-year gate; both behaviors ship until a single source of truth is
/// agreed with product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub minimum_age_years: i32,
    pub minimum_weight_kg: f32,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            minimum_age_years: 19,
            minimum_weight_kg: 50.0,
        }
    }
}
