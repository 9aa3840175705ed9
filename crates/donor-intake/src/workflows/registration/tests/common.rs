use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::registration::domain::{
    AvailableDay, BloodGroup, ContactMethod, DonationRadius, Gender, GovernmentIdKind,
    RegistrationDraft, YesNo,
};
use crate::workflows::registration::gateway::{
    Notification, Notifier, NotifyError, SubmissionError, SubmissionGateway, SubmissionReceipt,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

/// A draft that passes every step of the wizard.
pub(super) fn complete_draft() -> RegistrationDraft {
    let mut available_days = BTreeSet::new();
    available_days.insert(AvailableDay::Weekends);

    RegistrationDraft {
        full_name: Some("Asha Rao".to_string()),
        date_of_birth: NaiveDate::from_ymd_opt(1995, 3, 2),
        gender: Some(Gender::Female),
        mobile_number: Some("9876543210".to_string()),
        email: Some("asha.rao@example.com".to_string()),
        government_id_type: Some(GovernmentIdKind::Aadhaar),
        government_id_number: Some("2345 6789 0123".to_string()),
        blood_group: Some(BloodGroup::OPositive),
        first_donation: Some(YesNo::Yes),
        last_donation_date: None,
        weight: Some(58.0),
        has_chronic_disease: Some(YesNo::No),
        chronic_diseases: BTreeSet::new(),
        on_medication: Some(YesNo::No),
        recent_surgery: Some(YesNo::No),
        infectious_diseases: Some(YesNo::No),
        state: Some("Karnataka".to_string()),
        district: Some("Bengaluru Urban".to_string()),
        city: Some("Bengaluru".to_string()),
        pincode: Some("560001".to_string()),
        donation_radius: Some(DonationRadius::Km20),
        available_days,
        contact_method: Some(ContactMethod::WhatsApp),
        emergency_donation: Some(true),
        consent_accuracy: true,
        consent_contact: true,
    }
}

/// Recording gateway double; flips to failure mode via `fail_with`.
#[derive(Default)]
pub(super) struct MemoryGateway {
    submissions: Mutex<Vec<RegistrationDraft>>,
    failure: Mutex<Option<String>>,
    sequence: AtomicU64,
}

impl MemoryGateway {
    pub(super) fn fail_with(&self, message: &str) {
        *self.failure.lock().expect("gateway mutex poisoned") = Some(message.to_string());
    }

    pub(super) fn submissions(&self) -> Vec<RegistrationDraft> {
        self.submissions
            .lock()
            .expect("gateway mutex poisoned")
            .clone()
    }
}

impl SubmissionGateway for MemoryGateway {
    fn submit(&self, draft: &RegistrationDraft) -> Result<SubmissionReceipt, SubmissionError> {
        if let Some(message) = self.failure.lock().expect("gateway mutex poisoned").clone() {
            return Err(SubmissionError::Rejected(message));
        }

        self.submissions
            .lock()
            .expect("gateway mutex poisoned")
            .push(draft.clone());
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(SubmissionReceipt {
            registration_id: format!("reg-{id:06}"),
        })
    }
}

#[derive(Default)]
pub(super) struct MemoryNotifier {
    notes: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub(super) fn notes(&self) -> Vec<Notification> {
        self.notes.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        self.notes
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) fn collaborators() -> (Arc<MemoryGateway>, Arc<MemoryNotifier>) {
    (
        Arc::new(MemoryGateway::default()),
        Arc::new(MemoryNotifier::default()),
    )
}
