use super::domain::{DraftPatch, FieldKey, RegistrationDraft, ValidationErrors};
use super::identity;

/// Holds the accumulating draft and its error map across wizard steps.
/// Created empty when the wizard opens and discarded with the session.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    draft: RegistrationDraft,
    errors: ValidationErrors,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a prefetched draft, e.g. on the profile-edit screen.
    pub fn with_draft(draft: RegistrationDraft) -> Self {
        Self {
            draft,
            errors: ValidationErrors::default(),
        }
    }

    /// Apply one field edit. The edited field's error clears immediately
    /// (optimistic clear); re-validation only happens on a step advance or
    /// submit attempt. ID numbers pass through the active formatter before
    /// landing in the draft.
    pub fn apply(&mut self, patch: DraftPatch) {
        self.errors.clear(patch.key());

        match patch {
            DraftPatch::FullName(value) => self.draft.full_name = Some(value),
            DraftPatch::DateOfBirth(value) => self.draft.date_of_birth = value,
            DraftPatch::Gender(value) => self.draft.gender = Some(value),
            DraftPatch::MobileNumber(value) => self.draft.mobile_number = Some(value),
            DraftPatch::Email(value) => self.draft.email = Some(value),
            DraftPatch::GovernmentIdType(kind) => {
                // Formatting state does not carry across ID types.
                self.draft.government_id_type = kind;
                self.draft.government_id_number = None;
                self.errors.clear(FieldKey::GovernmentIdNumber);
            }
            DraftPatch::GovernmentIdNumber(value) => {
                let formatted = match self.draft.government_id_type {
                    Some(kind) => identity::format(kind, &value),
                    None => value,
                };
                self.draft.government_id_number = Some(formatted);
            }
            DraftPatch::BloodGroup(value) => self.draft.blood_group = Some(value),
            DraftPatch::FirstDonation(value) => self.draft.first_donation = Some(value),
            DraftPatch::LastDonationDate(value) => self.draft.last_donation_date = value,
            DraftPatch::Weight(value) => self.draft.weight = value,
            DraftPatch::HasChronicDisease(value) => self.draft.has_chronic_disease = Some(value),
            DraftPatch::ChronicDiseases(value) => self.draft.chronic_diseases = value,
            DraftPatch::OnMedication(value) => self.draft.on_medication = Some(value),
            DraftPatch::RecentSurgery(value) => self.draft.recent_surgery = Some(value),
            DraftPatch::InfectiousDiseases(value) => self.draft.infectious_diseases = Some(value),
            DraftPatch::State(value) => self.draft.state = Some(value),
            DraftPatch::District(value) => self.draft.district = Some(value),
            DraftPatch::City(value) => self.draft.city = Some(value),
            DraftPatch::Pincode(value) => self.draft.pincode = Some(value),
            DraftPatch::DonationRadius(value) => self.draft.donation_radius = Some(value),
            DraftPatch::AvailableDays(value) => self.draft.available_days = value,
            DraftPatch::ContactMethod(value) => self.draft.contact_method = Some(value),
            DraftPatch::EmergencyDonation(value) => self.draft.emergency_donation = Some(value),
            DraftPatch::ConsentAccuracy(value) => self.draft.consent_accuracy = value,
            DraftPatch::ConsentContact(value) => self.draft.consent_contact = value,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub(crate) fn set_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    pub(crate) fn clear_errors(&mut self) {
        self.errors.clear_all();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
