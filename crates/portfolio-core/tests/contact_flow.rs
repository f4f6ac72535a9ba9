//! End-to-end contact submission timing under a paused tokio clock.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use portfolio_core::{
    run_submission, ContactError, ContactForm, Field, FormHandle, Phase, SimulatedSubmitter,
    Submission, Submitter,
};

const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
const SUCCESS_DISPLAY: Duration = Duration::from_millis(5000);

fn filled_form() -> Arc<Mutex<ContactForm>> {
    let mut form = ContactForm::default();
    form.set_field(Field::Name, "Grace");
    form.set_field(Field::Email, "grace@example.com");
    form.set_field(Field::Subject, "Collaboration");
    form.set_field(Field::Message, "Let's talk");
    Arc::new(Mutex::new(form))
}

async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}

#[tokio::test(start_paused = true)]
async fn submit_then_banner_then_dismiss() {
    let form = filled_form();
    let task_form = Arc::clone(&form);
    let handle = tokio::spawn(async move {
        run_submission(&task_form, &SimulatedSubmitter::new(SUBMIT_DELAY), SUCCESS_DISPLAY).await
    });
    settle().await;

    assert!(form.with_form(|f| f.is_submitting()));
    assert!(!form.with_form(|f| f.success_visible()));

    advance_ms(1999).await;
    assert!(form.with_form(|f| f.is_submitting()));

    advance_ms(1).await;
    form.with_form(|f| {
        assert!(!f.is_submitting());
        assert!(f.success_visible());
        assert_eq!(f.value(Field::Message), "");
    });

    advance_ms(4999).await;
    assert!(form.with_form(|f| f.success_visible()));

    advance_ms(1).await;
    assert!(!form.with_form(|f| f.success_visible()));

    assert_eq!(handle.await.unwrap(), Ok(()));
}

#[tokio::test(start_paused = true)]
async fn empty_field_never_starts() {
    let form = Arc::new(Mutex::new(ContactForm::default()));
    let result = run_submission(&form, &SimulatedSubmitter::default(), SUCCESS_DISPLAY).await;

    assert_eq!(result, Err(ContactError::Validation(Field::Name)));
    assert_eq!(
        form.with_form(|f| f.phase().clone()),
        Phase::Failed(ContactError::Validation(Field::Name))
    );
}

#[tokio::test(start_paused = true)]
async fn whitespace_field_surfaces_validation_error() {
    let form = filled_form();
    form.with_form(|f| f.set_field(Field::Subject, " "));

    let result = run_submission(&form, &SimulatedSubmitter::new(SUBMIT_DELAY), SUCCESS_DISPLAY).await;

    assert_eq!(result, Err(ContactError::Validation(Field::Subject)));
    form.with_form(|f| {
        let err = f.error().cloned();
        assert_eq!(err, Some(ContactError::Validation(Field::Subject)));
        assert!(!err.unwrap().is_retryable());
        assert!(!f.is_submitting());
        assert!(!f.success_visible());
        assert_eq!(f.value(Field::Name), "Grace");
    });

    // Fixing the field clears the error and the next submission goes through
    form.with_form(|f| f.set_field(Field::Subject, "Collaboration"));
    assert_eq!(form.with_form(|f| f.phase().clone()), Phase::Editing);
    let task_form = Arc::clone(&form);
    let handle = tokio::spawn(async move {
        run_submission(&task_form, &SimulatedSubmitter::new(SUBMIT_DELAY), SUCCESS_DISPLAY).await
    });
    settle().await;
    assert!(form.with_form(|f| f.is_submitting()));

    advance_ms(2000).await;
    assert!(form.with_form(|f| f.success_visible()));
    advance_ms(5000).await;
    assert_eq!(handle.await.unwrap(), Ok(()));
}

#[tokio::test(start_paused = true)]
async fn second_submit_rejected_while_in_flight() {
    let form = filled_form();
    let task_form = Arc::clone(&form);
    tokio::spawn(async move {
        run_submission(&task_form, &SimulatedSubmitter::new(SUBMIT_DELAY), SUCCESS_DISPLAY).await
    });
    settle().await;

    let second = run_submission(&form, &SimulatedSubmitter::new(SUBMIT_DELAY), SUCCESS_DISPLAY).await;
    assert_eq!(second, Err(ContactError::AlreadySubmitting));
}

struct FailingSubmitter;

impl Submitter for FailingSubmitter {
    async fn submit(&self, _submission: &Submission) -> Result<(), ContactError> {
        Err(ContactError::Server("503".into()))
    }
}

#[tokio::test(start_paused = true)]
async fn failure_keeps_fields_for_retry() {
    let form = filled_form();
    let result = run_submission(&form, &FailingSubmitter, SUCCESS_DISPLAY).await;

    assert_eq!(result, Err(ContactError::Server("503".into())));
    form.with_form(|f| {
        assert!(matches!(f.phase(), Phase::Failed(ContactError::Server(_))));
        assert_eq!(f.value(Field::Name), "Grace");
        assert!(!f.success_visible());
    });
}
