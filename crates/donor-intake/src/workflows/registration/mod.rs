//! Donor registration intake: draft accumulation, per-field validation,
//! government-ID formatting, the eligibility rule, and the four-step wizard.

pub mod domain;
pub mod draft;
pub mod eligibility;
pub mod gateway;
pub mod identity;
pub mod profile;
pub mod service;
pub mod validators;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use domain::{
    AvailableDay, BloodGroup, ContactMethod, DonationRadius, DraftPatch, FieldKey, Gender,
    GovernmentIdKind, RegistrationDraft, ValidationErrors, YesNo,
};
pub use draft::DraftStore;
pub use eligibility::{EligibilityConfig, EligibilityOutcome};
pub use gateway::{
    Notification, NotificationKind, Notifier, NotifyError, ProfileError, ProfileSource,
    SubmissionError, SubmissionGateway, SubmissionReceipt,
};
pub use service::{RegistrationService, RegistrationServiceError};
pub use wizard::{RegistrationWizard, WizardError, WizardStep};
