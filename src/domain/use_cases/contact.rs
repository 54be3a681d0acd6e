use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

use crate::{
    contact_client::{ContactTransport, HttpContactTransport},
    entities::contact_me::{ContactField, ContactRule},
    settings::AppConfig,
    use_cases::contact_form::{ContactFormState, SubmitRefusal},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Delivered; the form was reset and the success flag is showing.
    Sent,
    /// Not sent: these fields failed validation.
    Blocked(Vec<(ContactField, ContactRule)>),
    /// Not sent: an earlier submission is still in flight.
    InFlight,
    /// Sent but failed; the message is what the form shows.
    Failed(String),
}

/// Owns a contact form's state and drives submissions through a transport.
pub struct ContactSession<T>
where
    T: ContactTransport,
{
    state: Arc<Mutex<ContactFormState>>,
    transport: T,
    success_reset: Duration,
}

impl<T> ContactSession<T>
where
    T: ContactTransport,
{
    pub fn new(transport: T, success_reset: Duration) -> Self {
        ContactSession {
            state: Arc::new(Mutex::new(ContactFormState::new())),
            transport,
            success_reset,
        }
    }

    /// A copy of the current form state.
    pub fn snapshot(&self) -> ContactFormState {
        self.state.lock().clone()
    }

    pub fn edit(&self, field: ContactField, value: impl Into<String>) {
        self.state.lock().edit(field, value);
    }

    pub fn blur(&self, field: ContactField) {
        self.state.lock().blur(field);
    }

    /// Validates, sends once, and records the outcome. After a success the flag
    /// is cleared by a timer `success_reset` later. Must run inside a tokio runtime.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = match self.state.lock().begin_submit() {
            Ok(payload) => payload,
            Err(SubmitRefusal::Invalid(failing)) => return SubmitOutcome::Blocked(failing),
            Err(SubmitRefusal::InFlight) => return SubmitOutcome::InFlight,
        };

        let guard = InFlightGuard::new(&self.state);
        let result = self.transport.send(&payload).await;
        guard.settle();

        match result {
            Ok(()) => {
                let ticket = self.state.lock().submit_succeeded();
                info!("Contact message sent");

                let state = Arc::clone(&self.state);
                let delay = self.success_reset;
                tokio::spawn(async move {
                    sleep(delay).await;
                    state.lock().clear_success(ticket);
                });

                SubmitOutcome::Sent
            }
            Err(e) => {
                error!("Error submitting contact form: {}", e);
                let message = e.to_string();
                self.state.lock().submit_failed(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

/// Puts the form back to idle if a submission future is dropped mid-send.
struct InFlightGuard<'a> {
    state: &'a Mutex<ContactFormState>,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(state: &'a Mutex<ContactFormState>) -> Self {
        InFlightGuard { state, armed: true }
    }

    fn settle(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed && self.state.lock().submit_cancelled() {
            warn!("Contact submission dropped before the transport answered");
        }
    }
}

impl ContactSession<HttpContactTransport> {
    /// A session posting to the configured contact endpoint.
    pub fn from_config(config: &AppConfig) -> Self {
        ContactSession::new(
            HttpContactTransport::new(config.contact_endpoint.clone()),
            config.contact_success_reset(),
        )
    }
}
