mod config;

pub use config::EligibilityConfig;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Result of the eligibility rule: fitness plus the ordered reasons a donor
/// falls short. Independent of wizard validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub eligible: bool,
    pub reasons: Vec<String>,
}

/// Whole years between `date_of_birth` and `today`, decremented when the
/// birthday has not yet occurred this year.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Pure function of the two profile inputs. Reasons append in a fixed
/// order: age, weight, missing date of birth, missing weight. A donor is
/// eligible only when both fields are present and both thresholds pass.
pub fn assess(
    date_of_birth: Option<NaiveDate>,
    weight: Option<f32>,
    today: NaiveDate,
    config: &EligibilityConfig,
) -> EligibilityOutcome {
    let mut reasons = Vec::new();
    let mut age_ok = false;
    let mut weight_ok = false;

    if let Some(dob) = date_of_birth {
        if age_on(dob, today) >= config.minimum_age_years {
            age_ok = true;
        } else {
            reasons.push(format!(
                "You must be at least {} years old to donate",
                config.minimum_age_years
            ));
        }
    }

    if let Some(weight) = weight {
        if weight >= config.minimum_weight_kg {
            weight_ok = true;
        } else {
            reasons.push(format!(
                "Minimum weight requirement is {} kg",
                config.minimum_weight_kg
            ));
        }
    }

    if date_of_birth.is_none() {
        reasons.push("Date of birth is required".to_string());
    }
    if weight.is_none() {
        reasons.push("Weight is required".to_string());
    }

    EligibilityOutcome {
        eligible: age_ok && weight_ok,
        reasons,
    }
}
