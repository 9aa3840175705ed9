use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{DraftPatch, FieldKey, RegistrationDraft, ValidationErrors};
use super::draft::DraftStore;
use super::validators;

/// The four sequential registration pages. Forward movement requires a clean
/// validation pass; backward movement never validates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Personal,
    Health,
    Location,
    Consent,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Personal => 1,
            WizardStep::Health => 2,
            WizardStep::Location => 3,
            WizardStep::Consent => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal Details",
            WizardStep::Health => "Health Information",
            WizardStep::Location => "Location & Availability",
            WizardStep::Consent => "Consent",
        }
    }

    fn forward(self) -> Option<WizardStep> {
        match self {
            WizardStep::Personal => Some(WizardStep::Health),
            WizardStep::Health => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::Consent),
            WizardStep::Consent => None,
        }
    }

    fn backward(self) -> Option<WizardStep> {
        match self {
            WizardStep::Personal => None,
            WizardStep::Health => Some(WizardStep::Personal),
            WizardStep::Location => Some(WizardStep::Health),
            WizardStep::Consent => Some(WizardStep::Location),
        }
    }

    /// Fields validated when leaving this step. Optional health answers are
    /// listed so edits to them route through the same error-clearing path.
    pub fn fields(self) -> &'static [FieldKey] {
        match self {
            WizardStep::Personal => &[
                FieldKey::FullName,
                FieldKey::DateOfBirth,
                FieldKey::Gender,
                FieldKey::MobileNumber,
                FieldKey::Email,
                FieldKey::GovernmentIdNumber,
            ],
            WizardStep::Health => &[
                FieldKey::BloodGroup,
                FieldKey::FirstDonation,
                FieldKey::LastDonationDate,
                FieldKey::Weight,
                FieldKey::HasChronicDisease,
                FieldKey::ChronicDiseases,
                FieldKey::OnMedication,
                FieldKey::RecentSurgery,
                FieldKey::InfectiousDiseases,
            ],
            WizardStep::Location => &[
                FieldKey::State,
                FieldKey::District,
                FieldKey::City,
                FieldKey::Pincode,
                FieldKey::DonationRadius,
                FieldKey::AvailableDays,
                FieldKey::ContactMethod,
                FieldKey::EmergencyDonation,
            ],
            WizardStep::Consent => &[FieldKey::ConsentAccuracy, FieldKey::ConsentContact],
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("submit is only available from the consent step")]
    NotOnConsentStep,
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("the draft has {} validation error(s)", .0.len())]
    Invalid(ValidationErrors),
}

/// Sequences the four steps over a [`DraftStore`], gating forward movement
/// on a clean error map and guarding against re-entrant submits.
#[derive(Debug, Default)]
pub struct RegistrationWizard {
    store: DraftStore,
    step: WizardStep,
    submitting: bool,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the wizard over an existing draft, still on the first step.
    pub fn with_draft(draft: RegistrationDraft) -> Self {
        Self {
            store: DraftStore::with_draft(draft),
            step: WizardStep::Personal,
            submitting: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &RegistrationDraft {
        self.store.draft()
    }

    pub fn errors(&self) -> &ValidationErrors {
        self.store.errors()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Record a field edit; clears that field's error immediately.
    pub fn edit(&mut self, patch: DraftPatch) {
        self.store.apply(patch);
    }

    /// Validate the current step. On a clean pass the wizard advances and
    /// the error map empties; otherwise it stays put and exposes the errors.
    pub fn next(&mut self, today: NaiveDate) -> &ValidationErrors {
        let errors = validators::run(self.step.fields(), self.store.draft(), today);
        if errors.is_empty() {
            if let Some(step) = self.step.forward() {
                self.step = step;
            }
            self.store.clear_errors();
        } else {
            self.store.set_errors(errors);
        }
        self.store.errors()
    }

    /// Move one step back without validating; pending errors clear.
    pub fn back(&mut self) {
        if let Some(step) = self.step.backward() {
            self.step = step;
        }
        self.store.clear_errors();
    }

    /// Validate the consent step and hand the completed draft to the caller
    /// for delivery. At most one submission may be in flight; the flag holds
    /// until [`finish_submit`](Self::finish_submit) resolves it.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Result<RegistrationDraft, WizardError> {
        if self.step != WizardStep::Consent {
            return Err(WizardError::NotOnConsentStep);
        }
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }

        let errors = validators::run(self.step.fields(), self.store.draft(), today);
        if !errors.is_empty() {
            self.store.set_errors(errors.clone());
            return Err(WizardError::Invalid(errors));
        }

        self.store.clear_errors();
        self.submitting = true;
        Ok(self.store.draft().clone())
    }

    /// Resolve the in-flight submission. Success resets to an empty draft on
    /// the first step; failure keeps the draft and step so the donor can
    /// retry without re-entering anything.
    pub fn finish_submit(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.store.reset();
            self.step = WizardStep::Personal;
        }
    }
}
