use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::gateway::{
    Notification, Notifier, NotifyError, SubmissionError, SubmissionGateway, SubmissionReceipt,
};
use super::wizard::{RegistrationWizard, WizardError};

/// Drives the submit edge of the wizard against the external collaborators:
/// validate, deliver, notify, and either reset or preserve the draft.
pub struct RegistrationService<G, N> {
    gateway: Arc<G>,
    notifier: Arc<N>,
}

impl<G, N> RegistrationService<G, N>
where
    G: SubmissionGateway + 'static,
    N: Notifier + 'static,
{
    pub fn new(gateway: Arc<G>, notifier: Arc<N>) -> Self {
        Self { gateway, notifier }
    }

    /// Submit the wizard's draft. On collaborator failure the draft and step
    /// survive so the donor can retry without re-entering data; the failure
    /// reaches the donor as a notification rather than a field error.
    pub fn submit(
        &self,
        wizard: &mut RegistrationWizard,
        today: NaiveDate,
    ) -> Result<SubmissionReceipt, RegistrationServiceError> {
        let draft = wizard.begin_submit(today)?;

        match self.gateway.submit(&draft) {
            Ok(receipt) => {
                wizard.finish_submit(true);
                info!(registration_id = %receipt.registration_id, "registration submitted");
                self.notifier
                    .notify(Notification::success("Registration submitted successfully"))?;
                Ok(receipt)
            }
            Err(err) => {
                wizard.finish_submit(false);
                warn!(error = %err, "registration submission failed");
                self.notifier.notify(Notification::error(err.to_string()))?;
                Err(RegistrationServiceError::Gateway(err))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistrationServiceError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Gateway(#[from] SubmissionError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
