use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use donor_intake::workflows::registration::{
    Notification, Notifier, NotifyError, RegistrationDraft, SubmissionError, SubmissionGateway,
    SubmissionReceipt,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Accepted registrations held in memory; persistence proper belongs to the
/// backing platform, not this service.
#[derive(Default)]
pub(crate) struct InMemorySubmissionGateway {
    accepted: Mutex<Vec<RegistrationDraft>>,
    sequence: AtomicU64,
}

impl InMemorySubmissionGateway {
    #[cfg(test)]
    pub(crate) fn accepted(&self) -> Vec<RegistrationDraft> {
        self.accepted.lock().expect("gateway mutex poisoned").clone()
    }
}

impl SubmissionGateway for InMemorySubmissionGateway {
    fn submit(&self, draft: &RegistrationDraft) -> Result<SubmissionReceipt, SubmissionError> {
        self.accepted
            .lock()
            .map_err(|_| SubmissionError::Unavailable("submission store poisoned".to_string()))?
            .push(draft.clone());
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(SubmissionReceipt {
            registration_id: format!("reg-{id:06}"),
        })
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    notes: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    #[cfg(test)]
    pub(crate) fn notes(&self) -> Vec<Notification> {
        self.notes.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        self.notes
            .lock()
            .map_err(|_| NotifyError::Channel("notification buffer poisoned".to_string()))?
            .push(notification);
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
