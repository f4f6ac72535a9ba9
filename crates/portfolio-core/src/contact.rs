//! Contact form state and submission.
//!
//! The form moves `Editing -> Submitting -> Editing` (success) or
//! `Submitting -> Failed` (error, fields kept for retry). A success raises a
//! banner that is cleared after a display period; each success gets a new
//! epoch so a stale dismiss timer never clears a newer banner.
//!
//! Submission goes through a [`Submitter`]. The page ships with
//! [`SimulatedSubmitter`], which waits and always succeeds.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;

use crate::config::DEFAULT_SUBMIT_DELAY_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name *",
            Field::Email => "Email *",
            Field::Subject => "Subject *",
            Field::Message => "Message *",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }

    fn index(&self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }
}

/// Why a submission did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Required field left blank
    #[error("Please fill in the {} field", .0.name())]
    Validation(Field),

    /// A submission is already in flight
    #[error("A message is already being sent")]
    AlreadySubmitting,

    /// Could not reach the submission service
    #[error("Network error: {0}")]
    Network(String),

    /// Submission service rejected the message
    #[error("Server error: {0}")]
    Server(String),
}

impl ContactError {
    /// Whether showing a retry action makes sense.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ContactError::Network(_) | ContactError::Server(_))
    }
}

/// Snapshot of the fields handed to a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Failed(ContactError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    values: [String; 4],
    phase: Phase,
    success_epoch: u64,
    success_visible: bool,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Update a field. Editing clears a pending validation error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
        if matches!(self.phase, Phase::Failed(ContactError::Validation(_))) {
            self.phase = Phase::Editing;
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn error(&self) -> Option<&ContactError> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Enter `Submitting` and return the fields to send.
    ///
    /// A blank field moves the form to `Failed(Validation(field))` so the
    /// error is shown; a submission already in flight is left untouched.
    pub fn begin_submit(&mut self) -> Result<Submission, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
        {
            let err = ContactError::Validation(field);
            self.phase = Phase::Failed(err.clone());
            return Err(err);
        }

        self.phase = Phase::Submitting;
        Ok(Submission {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            subject: self.value(Field::Subject).to_string(),
            message: self.value(Field::Message).to_string(),
        })
    }

    /// Leave `Submitting`.
    ///
    /// On success the fields are cleared and the banner raised; the returned
    /// epoch identifies this banner for [`dismiss_success`](Self::dismiss_success).
    /// On failure the fields stay so the visitor can retry.
    pub fn finish_submit(&mut self, outcome: Result<(), ContactError>) -> Option<u64> {
        match outcome {
            Ok(()) => {
                self.values = Default::default();
                self.phase = Phase::Editing;
                self.success_epoch += 1;
                self.success_visible = true;
                Some(self.success_epoch)
            }
            Err(err) => {
                self.phase = Phase::Failed(err);
                None
            }
        }
    }

    /// Clear the banner raised at `epoch`. Returns whether it was cleared.
    pub fn dismiss_success(&mut self, epoch: u64) -> bool {
        if self.success_visible && self.success_epoch == epoch {
            self.success_visible = false;
            true
        } else {
            false
        }
    }
}

/// Delivers a submission somewhere.
pub trait Submitter {
    fn submit(&self, submission: &Submission) -> impl Future<Output = Result<(), ContactError>>;
}

/// Waits for a fixed delay and reports success. Nothing is sent.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS))
    }
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<(), ContactError> {
        tracing::info!(subject = %submission.subject, "Simulating contact submission");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Mutable access to a form that lives behind some shared cell.
pub trait FormHandle {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R;
}

impl FormHandle for Arc<Mutex<ContactForm>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut self.lock())
    }
}

/// Run one submission end to end.
///
/// Marks the form submitting, awaits the submitter, records the outcome and,
/// on success, keeps the banner up for `success_display` before clearing it.
/// No lock is held across an await.
pub async fn run_submission<H, S>(
    form: &H,
    submitter: &S,
    success_display: Duration,
) -> Result<(), ContactError>
where
    H: FormHandle,
    S: Submitter,
{
    let submission = form.with_form(|f| f.begin_submit())?;
    let outcome = submitter.submit(&submission).await;

    if let Err(ref err) = outcome {
        tracing::warn!(error = %err, "Contact submission failed");
    }
    let epoch = form.with_form(|f| f.finish_submit(outcome.clone()));

    if let Some(epoch) = epoch {
        tokio::time::sleep(success_display).await;
        form.with_form(|f| f.dismiss_success(epoch));
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Subject, "Hello");
        form.set_field(Field::Message, "Nice site");
        form
    }

    #[test]
    fn begin_submit_requires_all_fields() {
        let mut form = filled();
        form.set_field(Field::Subject, "   ");
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::Validation(Field::Subject))
        );
        assert_eq!(form.error(), Some(&ContactError::Validation(Field::Subject)));
        assert!(!form.is_submitting());
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn editing_clears_validation_error() {
        let mut form = filled();
        form.set_field(Field::Email, "");
        assert!(form.begin_submit().is_err());
        assert!(form.error().is_some());

        form.set_field(Field::Email, "ada@example.com");
        assert_eq!(form.phase(), &Phase::Editing);
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn network_error_survives_editing() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Err(ContactError::Server("503".into())));
        form.set_field(Field::Message, "Still there?");
        assert_eq!(form.error(), Some(&ContactError::Server("503".into())));
    }

    #[test]
    fn no_concurrent_resubmission() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
    }

    #[test]
    fn success_clears_fields_and_raises_banner() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.name, "Ada");

        let epoch = form.finish_submit(Ok(())).unwrap();
        assert!(!form.is_submitting());
        assert!(form.success_visible());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
        assert!(form.dismiss_success(epoch));
        assert!(!form.success_visible());
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let err = ContactError::Network("offline".into());
        assert_eq!(form.finish_submit(Err(err.clone())), None);

        assert_eq!(form.error(), Some(&err));
        assert_eq!(form.value(Field::Name), "Ada");
        assert!(err.is_retryable());

        // Retry is allowed from Failed
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn stale_dismiss_ignored() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let first = form.finish_submit(Ok(())).unwrap();

        let mut refilled = filled();
        std::mem::swap(&mut form.values, &mut refilled.values);
        form.begin_submit().unwrap();
        let second = form.finish_submit(Ok(())).unwrap();

        assert!(!form.dismiss_success(first));
        assert!(form.success_visible());
        assert!(form.dismiss_success(second));
    }

    #[test]
    fn validation_error_message() {
        let err = ContactError::Validation(Field::Email);
        assert_eq!(err.to_string(), "Please fill in the email field");
        assert!(!err.is_retryable());
    }
}
