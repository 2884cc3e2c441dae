use async_trait::async_trait;
use shared::{domain::Step, error::IntakeError, protocol::SubmissionReceipt};
use thiserror::Error;
use tracing::{info, warn};

use crate::{form::FormState, review::DraftSnapshot, wizard::WizardController};

/// Destination of a completed draft. Network and persistence live behind it.
#[async_trait]
pub trait DraftSubmitter: Send + Sync {
    async fn submit(&self, snapshot: DraftSnapshot) -> anyhow::Result<SubmissionReceipt>;
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission is only possible from the review step (current step: {step})")]
    NotAtReview { step: Step },
    #[error(transparent)]
    Rejected(#[from] IntakeError),
    #[error("draft submission failed: {0}")]
    Failed(#[source] anyhow::Error),
}

/// Validates the whole draft, snapshots it and hands the snapshot to
/// `submitter`. The controller moves to the success view only once the
/// submitter has returned a receipt; dropping the future leaves it in place.
pub async fn submit_draft(
    controller: &mut WizardController,
    form: &FormState<'_>,
    submitter: &dyn DraftSubmitter,
) -> Result<SubmissionReceipt, SubmitError> {
    let step = controller.current_step();
    if step != Step::ReviewSubmit {
        return Err(SubmitError::NotAtReview { step });
    }
    WizardController::check_advance(step, form)?;

    let snapshot = DraftSnapshot::capture(form);
    let receipt = submitter.submit(snapshot).await.map_err(|err| {
        warn!(error = %err, "draft submission failed");
        SubmitError::Failed(err)
    })?;

    info!(request_id = %receipt.request_id, "draft submitted");
    controller.advance();
    Ok(receipt)
}

#[cfg(test)]
#[path = "tests/submit_tests.rs"]
mod tests;
