use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use super::*;
use crate::test_support::Draft;

#[derive(Default)]
struct RecordingSubmitter {
    received: Arc<Mutex<Vec<DraftSnapshot>>>,
    fail_with: Option<String>,
}

#[async_trait]
impl DraftSubmitter for RecordingSubmitter {
    async fn submit(&self, snapshot: DraftSnapshot) -> anyhow::Result<SubmissionReceipt> {
        if let Some(reason) = &self.fail_with {
            anyhow::bail!("{reason}");
        }
        self.received.lock().expect("lock").push(snapshot);
        Ok(SubmissionReceipt {
            request_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        })
    }
}

fn at_review() -> WizardController {
    let mut controller = WizardController::new();
    for _ in 0..4 {
        controller.advance();
    }
    assert_eq!(controller.current_step(), Step::ReviewSubmit);
    controller
}

#[tokio::test]
async fn submits_snapshot_and_enters_success() {
    let draft = Draft::complete();
    let submitter = RecordingSubmitter::default();
    let mut controller = at_review();

    submit_draft(&mut controller, &draft.form(), &submitter)
        .await
        .expect("submit");

    assert_eq!(controller.current_step(), Step::SubmissionSuccess);
    let received = submitter.received.lock().expect("lock");
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].entries[0].email(), "john.doe@example.com");
}

#[tokio::test]
async fn refuses_outside_review_step() {
    let draft = Draft::complete();
    let submitter = RecordingSubmitter::default();
    let mut controller = WizardController::new();

    let err = submit_draft(&mut controller, &draft.form(), &submitter)
        .await
        .expect_err("not at review");
    assert!(matches!(err, SubmitError::NotAtReview { step: Step::Intro }));
    assert!(submitter.received.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn incomplete_draft_is_rejected_without_submitting() {
    let mut draft = Draft::complete();
    draft.roster.set_attestation(false);
    let submitter = RecordingSubmitter::default();
    let mut controller = at_review();

    let err = submit_draft(&mut controller, &draft.form(), &submitter)
        .await
        .expect_err("missing attestation");
    assert!(matches!(
        err,
        SubmitError::Rejected(IntakeError::ValidationIncomplete {
            step: Step::ReviewSubmit,
            ..
        })
    ));
    assert_eq!(controller.current_step(), Step::ReviewSubmit);
    assert!(submitter.received.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn failed_submission_keeps_review_step() {
    let draft = Draft::complete();
    let submitter = RecordingSubmitter {
        fail_with: Some("service unavailable".into()),
        ..Default::default()
    };
    let mut controller = at_review();

    let err = submit_draft(&mut controller, &draft.form(), &submitter)
        .await
        .expect_err("submitter failure");
    assert!(err.to_string().contains("service unavailable"));
    assert_eq!(controller.current_step(), Step::ReviewSubmit);
}
