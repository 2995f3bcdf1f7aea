use std::{
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use shared::{
    domain::{FormField, FormSchema, FormState, SubmissionStatus},
    protocol::ContactPayload,
};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{error::DeliveryError, transport::ContactTransport};

pub const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";
pub const DEFAULT_RESET_AFTER: Duration = Duration::from_secs(3);
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone)]
pub struct SubmissionConfig {
    pub endpoint: String,
    /// How long `Succeeded` is shown before falling back to `Idle`.
    pub reset_after: Duration,
    pub schema: FormSchema,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CONTACT_ENDPOINT.into(),
            reset_after: DEFAULT_RESET_AFTER,
            schema: FormSchema::canonical(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
    /// Another submission for this form was still in flight; nothing was sent.
    Rejected,
}

struct FormSession {
    form: FormState,
    status: SubmissionStatus,
    error_message: Option<String>,
    reset_timer: Option<JoinHandle<()>>,
    /// Bumped on every submission; a timer only resets the generation it was armed for.
    reset_generation: u64,
}

struct Inner {
    config: SubmissionConfig,
    transport: Arc<dyn ContactTransport>,
    session: Mutex<FormSession>,
    status_tx: watch::Sender<SubmissionStatus>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, FormSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_status(&self, session: &mut FormSession, status: SubmissionStatus) {
        session.status = status;
        self.status_tx.send_replace(status);
    }

    fn reset_to_idle(&self, generation: u64) {
        let mut session = self.lock();
        if session.reset_generation != generation {
            debug!(generation, "stale reset timer fired; ignoring");
            return;
        }
        session.reset_timer = None;
        if session.status == SubmissionStatus::Succeeded {
            self.set_status(&mut session, SubmissionStatus::Idle);
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let session = self
            .session
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(timer) = session.reset_timer.take() {
            timer.abort();
        }
    }
}

/// Handle to one contact form instance. Clones share the same form.
///
/// The pending reset timer is cancelled once the last handle is dropped.
#[derive(Clone)]
pub struct SubmissionController {
    inner: Arc<Inner>,
}

impl SubmissionController {
    pub fn new(config: SubmissionConfig, transport: Arc<dyn ContactTransport>) -> Self {
        let session = FormSession {
            form: FormState::initial(&config.schema),
            status: SubmissionStatus::Idle,
            error_message: None,
            reset_timer: None,
            reset_generation: 0,
        };
        let (status_tx, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            inner: Arc::new(Inner {
                config,
                transport,
                session: Mutex::new(session),
                status_tx,
            }),
        }
    }

    pub fn config(&self) -> &SubmissionConfig {
        &self.inner.config
    }

    pub fn status(&self) -> SubmissionStatus {
        self.inner.lock().status
    }

    pub fn form(&self) -> FormState {
        self.inner.lock().form.clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.inner.lock().error_message.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.inner.status_tx.subscribe()
    }

    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        self.inner.lock().form.set(field, value);
    }

    /// Starts a submission of the current form.
    ///
    /// The status moves to `Pending` before this returns, so a second call
    /// made before the first future resolves yields [`SubmitOutcome::Rejected`]
    /// without issuing a request.
    ///
    /// The request runs on its own tokio task, so dropping the returned future
    /// only stops waiting for the outcome; the form still settles once the
    /// request finishes. Must be called from within a tokio runtime.
    pub fn submit(&self) -> impl Future<Output = SubmitOutcome> + Send + 'static {
        let started = self.begin().map(|payload| {
            let controller = self.clone();
            let task = tokio::spawn({
                let controller = controller.clone();
                async move { controller.deliver(payload).await }
            });
            (controller, task)
        });
        async move {
            let Some((controller, task)) = started else {
                return SubmitOutcome::Rejected;
            };
            match task.await {
                Ok(outcome) => outcome,
                Err(error) => {
                    warn!(%error, "contact delivery task ended early");
                    controller.complete(Err(DeliveryError::Interrupted))
                }
            }
        }
    }

    fn begin(&self) -> Option<ContactPayload> {
        let mut session = self.inner.lock();
        if session.status.is_pending() {
            debug!("contact submission already in flight; ignoring");
            return None;
        }

        if let Some(timer) = session.reset_timer.take() {
            timer.abort();
        }
        session.reset_generation = session.reset_generation.wrapping_add(1);
        session.error_message = None;
        self.inner.set_status(&mut session, SubmissionStatus::Pending);
        Some(ContactPayload::from(&session.form))
    }

    async fn deliver(&self, payload: ContactPayload) -> SubmitOutcome {
        let result = self
            .inner
            .transport
            .deliver(&self.inner.config.endpoint, &payload)
            .await;
        self.complete(result)
    }

    fn complete(&self, result: Result<(), DeliveryError>) -> SubmitOutcome {
        let mut session = self.inner.lock();
        match result {
            Ok(()) => {
                info!(endpoint = %self.inner.config.endpoint, "contact message delivered");
                session.form = FormState::initial(&self.inner.config.schema);
                session.reset_timer = Some(self.schedule_reset(session.reset_generation));
                self.inner.set_status(&mut session, SubmissionStatus::Succeeded);
                SubmitOutcome::Delivered
            }
            Err(error) => {
                warn!(
                    %error,
                    endpoint = %self.inner.config.endpoint,
                    "contact submission failed"
                );
                session.error_message = Some(SUBMISSION_FAILED_MESSAGE.to_string());
                self.inner.set_status(&mut session, SubmissionStatus::Failed);
                SubmitOutcome::Failed
            }
        }
    }

    fn schedule_reset(&self, generation: u64) -> JoinHandle<()> {
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        let delay = self.inner.config.reset_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = inner.upgrade() {
                inner.reset_to_idle(generation);
            }
        })
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
