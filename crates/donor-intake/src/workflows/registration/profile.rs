//! Single-step validation context for the profile-edit screens, which reuse
//! the wizard's validators and formatters over a prefetched draft.

use chrono::NaiveDate;

use super::domain::{FieldKey, RegistrationDraft, ValidationErrors};
use super::gateway::{ProfileError, ProfileSource};
use super::validators;

/// Fields the profile editor requires. Consent boxes and availability only
/// exist in the wizard, so they are absent here.
pub const PROFILE_FIELDS: &[FieldKey] = &[
    FieldKey::FullName,
    FieldKey::DateOfBirth,
    FieldKey::Gender,
    FieldKey::MobileNumber,
    FieldKey::Email,
    FieldKey::GovernmentIdNumber,
    FieldKey::BloodGroup,
    FieldKey::Weight,
    FieldKey::State,
    FieldKey::District,
    FieldKey::City,
    FieldKey::Pincode,
];

pub fn validate(draft: &RegistrationDraft, today: NaiveDate) -> ValidationErrors {
    validators::run(PROFILE_FIELDS, draft, today)
}

/// Load the prefill draft from the profile collaborator, defaulting to an
/// empty draft when none exists yet.
pub fn prefill<P: ProfileSource>(source: &P) -> Result<RegistrationDraft, ProfileError> {
    Ok(source.fetch()?.unwrap_or_default())
}
