use chrono::NaiveDate;

use super::common::{complete_draft, today};
use crate::workflows::registration::domain::{FieldKey, RegistrationDraft, YesNo};
use crate::workflows::registration::{profile, validators, WizardStep};

#[test]
fn empty_draft_fails_every_personal_requirement() {
    let draft = RegistrationDraft::default();
    let errors = validators::run(WizardStep::Personal.fields(), &draft, today());

    assert_eq!(errors.get(FieldKey::FullName), Some("Full name is required"));
    assert_eq!(
        errors.get(FieldKey::DateOfBirth),
        Some("Date of birth is required")
    );
    assert_eq!(errors.get(FieldKey::Gender), Some("Gender is required"));
    assert_eq!(
        errors.get(FieldKey::MobileNumber),
        Some("Mobile number is required")
    );
    // Email and the (empty, empty) government-ID pair are optional.
    assert_eq!(errors.get(FieldKey::Email), None);
    assert_eq!(errors.get(FieldKey::GovernmentIdNumber), None);
}

#[test]
fn whitespace_name_counts_as_missing() {
    let mut draft = complete_draft();
    draft.full_name = Some("   ".to_string());
    let errors = validators::run(WizardStep::Personal.fields(), &draft, today());
    assert_eq!(errors.get(FieldKey::FullName), Some("Full name is required"));
}

#[test]
fn wizard_age_gate_uses_plain_year_subtraction() {
    let mut draft = complete_draft();

    // Born in December 2007: calendar age on 2025-06-15 is 17, but the
    // wizard only subtracts years, so 2025 - 2007 = 18 passes.
    draft.date_of_birth = NaiveDate::from_ymd_opt(2007, 12, 31);
    let errors = validators::run(WizardStep::Personal.fields(), &draft, today());
    assert_eq!(errors.get(FieldKey::DateOfBirth), None);

    draft.date_of_birth = NaiveDate::from_ymd_opt(2008, 1, 1);
    let errors = validators::run(WizardStep::Personal.fields(), &draft, today());
    assert_eq!(
        errors.get(FieldKey::DateOfBirth),
        Some("You must be at least 18 years old")
    );
}

#[test]
fn mobile_number_must_be_ten_ascii_digits() {
    let mut draft = complete_draft();
    for bad in ["12345", "98765432101", "98765o3210", "98765 3210"] {
        draft.mobile_number = Some(bad.to_string());
        let errors = validators::run(WizardStep::Personal.fields(), &draft, today());
        assert_eq!(
            errors.get(FieldKey::MobileNumber),
            Some("Enter valid 10-digit mobile number"),
            "expected rejection for {bad:?}"
        );
    }

    draft.mobile_number = Some("9876543210".to_string());
    let errors = validators::run(WizardStep::Personal.fields(), &draft, today());
    assert_eq!(errors.get(FieldKey::MobileNumber), None);
}

#[test]
fn pincode_must_be_six_ascii_digits() {
    let mut draft = complete_draft();
    draft.pincode = Some("5600".to_string());
    let errors = validators::run(WizardStep::Location.fields(), &draft, today());
    assert_eq!(
        errors.get(FieldKey::Pincode),
        Some("Enter valid 6-digit pincode")
    );

    draft.pincode = None;
    let errors = validators::run(WizardStep::Location.fields(), &draft, today());
    assert_eq!(errors.get(FieldKey::Pincode), Some("Pincode is required"));
}

#[test]
fn weight_floor_is_fifty_kilograms() {
    let mut draft = complete_draft();
    draft.weight = Some(49.5);
    let errors = validators::run(WizardStep::Health.fields(), &draft, today());
    assert_eq!(
        errors.get(FieldKey::Weight),
        Some("Minimum weight requirement is 50 kg")
    );

    draft.weight = Some(50.0);
    let errors = validators::run(WizardStep::Health.fields(), &draft, today());
    assert_eq!(errors.get(FieldKey::Weight), None);
}

#[test]
fn last_donation_date_required_only_for_repeat_donors() {
    let mut draft = complete_draft();
    draft.first_donation = Some(YesNo::No);
    draft.last_donation_date = None;
    let errors = validators::run(WizardStep::Health.fields(), &draft, today());
    assert_eq!(
        errors.get(FieldKey::LastDonationDate),
        Some("Last donation date is required")
    );

    draft.last_donation_date = NaiveDate::from_ymd_opt(2024, 11, 20);
    let errors = validators::run(WizardStep::Health.fields(), &draft, today());
    assert_eq!(errors.get(FieldKey::LastDonationDate), None);

    draft.first_donation = Some(YesNo::Yes);
    draft.last_donation_date = None;
    let errors = validators::run(WizardStep::Health.fields(), &draft, today());
    assert_eq!(errors.get(FieldKey::LastDonationDate), None);
}

#[test]
fn availability_needs_at_least_one_day() {
    let mut draft = complete_draft();
    draft.available_days.clear();
    let errors = validators::run(WizardStep::Location.fields(), &draft, today());
    assert_eq!(
        errors.get(FieldKey::AvailableDays),
        Some("Please select at least one available day")
    );
}

#[test]
fn consents_have_distinct_messages() {
    let mut draft = complete_draft();
    draft.consent_accuracy = false;
    draft.consent_contact = false;
    let errors = validators::run(WizardStep::Consent.fields(), &draft, today());

    assert_eq!(
        errors.get(FieldKey::ConsentAccuracy),
        Some("Please confirm the information provided is accurate")
    );
    assert_eq!(
        errors.get(FieldKey::ConsentContact),
        Some("Please consent to being contacted for donation requests")
    );
}

#[test]
fn profile_context_reuses_the_same_rules() {
    let mut draft = complete_draft();
    draft.pincode = Some("56".to_string());
    draft.consent_accuracy = false; // not a profile field, must not surface

    let errors = profile::validate(&draft, today());
    assert_eq!(
        errors.get(FieldKey::Pincode),
        Some("Enter valid 6-digit pincode")
    );
    assert_eq!(errors.get(FieldKey::ConsentAccuracy), None);
    assert_eq!(errors.len(), 1);
}
