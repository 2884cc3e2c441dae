use async_trait::async_trait;
use chrono::Utc;
use intake_core::{DraftSnapshot, DraftSubmitter};
use shared::protocol::SubmissionReceipt;
use tracing::info;
use uuid::Uuid;

/// Accepts every draft and records the snapshot in the log. Stands in for the
/// request service, which is not part of this tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubmitter;

#[async_trait]
impl DraftSubmitter for LoggingSubmitter {
    async fn submit(&self, snapshot: DraftSnapshot) -> anyhow::Result<SubmissionReceipt> {
        let receipt = SubmissionReceipt {
            request_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        };
        let payload = serde_json::to_string(&snapshot)?;
        info!(
            request_id = %receipt.request_id,
            entries = snapshot.entries.len(),
            snapshot = %payload,
            "draft accepted"
        );
        Ok(receipt)
    }
}
