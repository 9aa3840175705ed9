//! Boundary traits for the collaborators this engine calls into. Delivery,
//! display, and persistence all live behind these seams so the core stays
//! synchronous and deterministic.

use serde::{Deserialize, Serialize};

use super::domain::RegistrationDraft;

/// Acknowledgement returned by the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub registration_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The backend rejected the registration with a human-readable message.
    #[error("{0}")]
    Rejected(String),
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

/// Accepts a completed draft for delivery to the backend. The engine never
/// retries; a failed submit is surfaced and left to the donor to re-trigger.
pub trait SubmissionGateway: Send + Sync {
    fn submit(&self, draft: &RegistrationDraft) -> Result<SubmissionReceipt, SubmissionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message for the notification collaborator; display and
/// auto-dismiss timing are its concern, not ours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification channel unavailable: {0}")]
    Channel(String),
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile service unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the partial draft that pre-populates profile-edit screens.
pub trait ProfileSource: Send + Sync {
    fn fetch(&self) -> Result<Option<RegistrationDraft>, ProfileError>;
}
