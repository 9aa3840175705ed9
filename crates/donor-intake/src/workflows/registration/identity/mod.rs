//! Keystroke-level formatting and submit-time validation for the three
//! accepted government-ID formats. Each formatter receives the full current
//! field value (not a delta), is idempotent, and never emits more than the
//! documented display length.

mod aadhaar;
mod driving_license;
mod voter_id;

use super::domain::{GovernmentIdKind, RegistrationDraft};

/// Longest display string each formatter can produce.
pub const AADHAAR_DISPLAY_MAX: usize = 14;
pub const VOTER_ID_DISPLAY_MAX: usize = 10;
pub const DRIVING_LICENSE_DISPLAY_MAX: usize = 23;

/// Reshape the raw field value into the canonical display string for `kind`.
pub fn format(kind: GovernmentIdKind, raw: &str) -> String {
    match kind {
        GovernmentIdKind::Aadhaar => aadhaar::format(raw),
        GovernmentIdKind::VoterId => voter_id::format(raw),
        GovernmentIdKind::DrivingLicense => driving_license::format(raw),
    }
}

/// Submit/blur-time format validation. `None` means the value is acceptable;
/// otherwise the first failing check's message is returned.
pub fn validate(kind: GovernmentIdKind, value: &str) -> Option<String> {
    match kind {
        GovernmentIdKind::Aadhaar => aadhaar::validate(value),
        GovernmentIdKind::VoterId => voter_id::validate(value),
        GovernmentIdKind::DrivingLicense => driving_license::validate(value),
    }
}

/// Submit-time check for the government-ID pair. The type and number must be
/// either both empty or both populated; only when both are present does the
/// per-type format validator run. Any resulting message is attached to the
/// ID number field.
pub fn submit_error(draft: &RegistrationDraft) -> Option<String> {
    let number = draft
        .government_id_number
        .as_deref()
        .map(str::trim)
        .unwrap_or("");

    match (draft.government_id_type, number.is_empty()) {
        (None, true) => None,
        (Some(_), true) => {
            Some("Please enter Government ID Number for the selected ID type".to_string())
        }
        (None, false) => {
            Some("Please select Government ID Type for the entered ID number".to_string())
        }
        (Some(kind), false) => validate(kind, number),
    }
}
