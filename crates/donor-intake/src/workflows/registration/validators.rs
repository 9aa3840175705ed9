//! Per-field validation shared by the registration wizard and the
//! profile-edit screen. Callers pass the field list their context requires;
//! each check is a pure function of the draft and the supplied date.

use chrono::{Datelike, NaiveDate};

use super::domain::{FieldKey, RegistrationDraft, ValidationErrors, YesNo};
use super::identity;

/// Donation age floor applied during the wizard. This check is deliberately
/// calendar-naive (plain year subtraction); the eligibility rule makes the
/// calendar-precise call with its own threshold.
pub const WIZARD_MINIMUM_AGE: i32 = 18;

const MOBILE_DIGITS: usize = 10;
const PINCODE_DIGITS: usize = 6;
const MINIMUM_WEIGHT_KG: f32 = 50.0;

/// Validate `fields` against the draft, collecting the first failing
/// message per field.
pub fn run(fields: &[FieldKey], draft: &RegistrationDraft, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for &field in fields {
        if let Some(message) = check(field, draft, today) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validate a single field; `None` means the field currently passes.
pub fn check(field: FieldKey, draft: &RegistrationDraft, today: NaiveDate) -> Option<String> {
    match field {
        FieldKey::FullName => required_text(&draft.full_name, "Full name is required"),
        FieldKey::DateOfBirth => date_of_birth(draft, today),
        FieldKey::Gender => required_choice(draft.gender.is_some(), "Gender is required"),
        FieldKey::MobileNumber => mobile_number(draft),
        // Optional contact field; no format rule in the intake flow.
        FieldKey::Email => None,
        // Pairing and format errors both surface on the number field.
        FieldKey::GovernmentIdType => None,
        FieldKey::GovernmentIdNumber => identity::submit_error(draft),
        FieldKey::BloodGroup => {
            required_choice(draft.blood_group.is_some(), "Blood group is required")
        }
        FieldKey::FirstDonation => {
            required_choice(draft.first_donation.is_some(), "Please select an option")
        }
        FieldKey::LastDonationDate => last_donation_date(draft),
        FieldKey::Weight => weight(draft),
        FieldKey::HasChronicDisease
        | FieldKey::ChronicDiseases
        | FieldKey::OnMedication
        | FieldKey::RecentSurgery
        | FieldKey::InfectiousDiseases => None,
        FieldKey::State => required_text(&draft.state, "State is required"),
        FieldKey::District => required_text(&draft.district, "District is required"),
        FieldKey::City => required_text(&draft.city, "City is required"),
        FieldKey::Pincode => pincode(draft),
        FieldKey::DonationRadius => required_choice(
            draft.donation_radius.is_some(),
            "Donation radius is required",
        ),
        FieldKey::AvailableDays => required_choice(
            !draft.available_days.is_empty(),
            "Please select at least one available day",
        ),
        FieldKey::ContactMethod => required_choice(
            draft.contact_method.is_some(),
            "Contact method is required",
        ),
        FieldKey::EmergencyDonation => None,
        FieldKey::ConsentAccuracy => required_choice(
            draft.consent_accuracy,
            "Please confirm the information provided is accurate",
        ),
        FieldKey::ConsentContact => required_choice(
            draft.consent_contact,
            "Please consent to being contacted for donation requests",
        ),
    }
}

fn required_text(value: &Option<String>, message: &str) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => None,
        _ => Some(message.to_string()),
    }
}

fn required_choice(present: bool, message: &str) -> Option<String> {
    if present {
        None
    } else {
        Some(message.to_string())
    }
}

fn date_of_birth(draft: &RegistrationDraft, today: NaiveDate) -> Option<String> {
    let Some(dob) = draft.date_of_birth else {
        return Some("Date of birth is required".to_string());
    };

    // Year subtraction only, uncorrected for month and day.
    let age = today.year() - dob.year();
    if age < WIZARD_MINIMUM_AGE {
        return Some("You must be at least 18 years old".to_string());
    }
    None
}

fn mobile_number(draft: &RegistrationDraft) -> Option<String> {
    let value = draft.mobile_number.as_deref().map(str::trim).unwrap_or("");
    if value.is_empty() {
        return Some("Mobile number is required".to_string());
    }
    if !exact_digits(value, MOBILE_DIGITS) {
        return Some("Enter valid 10-digit mobile number".to_string());
    }
    None
}

fn pincode(draft: &RegistrationDraft) -> Option<String> {
    let value = draft.pincode.as_deref().map(str::trim).unwrap_or("");
    if value.is_empty() {
        return Some("Pincode is required".to_string());
    }
    if !exact_digits(value, PINCODE_DIGITS) {
        return Some("Enter valid 6-digit pincode".to_string());
    }
    None
}

fn weight(draft: &RegistrationDraft) -> Option<String> {
    let Some(weight) = draft.weight else {
        return Some("Weight is required".to_string());
    };
    if weight < MINIMUM_WEIGHT_KG {
        return Some("Minimum weight requirement is 50 kg".to_string());
    }
    None
}

fn last_donation_date(draft: &RegistrationDraft) -> Option<String> {
    if draft.first_donation == Some(YesNo::No) && draft.last_donation_date.is_none() {
        return Some("Last donation date is required".to_string());
    }
    None
}

fn exact_digits(value: &str, count: usize) -> bool {
    value.chars().count() == count && value.chars().all(|ch| ch.is_ascii_digit())
}
