//! Replays scripted wizard actions against a session, one JSON event per line.

use std::io::{BufRead, Write};

use anyhow::Context;
use intake_core::DraftSubmitter;
use shared::protocol::{WizardAction, WizardEvent};
use tracing::{debug, warn};

use crate::controller::session::IntakeSession;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub applied: usize,
    pub rejected: usize,
}

/// Reads one `WizardAction` per line (blank lines and `#` comments skipped)
/// and writes the resulting `WizardEvent` for each.
pub async fn replay_script(
    session: &mut IntakeSession,
    script: impl BufRead,
    submitter: &dyn DraftSubmitter,
    mut out: impl Write,
) -> anyhow::Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (idx, line) in script.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read script line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action: WizardAction = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid wizard action on line {line_no}"))?;
        let event = session.apply(action, submitter).await;

        stats.applied += 1;
        if let WizardEvent::Rejected { error } = &event {
            stats.rejected += 1;
            warn!(line = line_no, code = ?error.code, "{}", error.message);
        } else {
            debug!(line = line_no, step = %session.step(), "action applied");
        }

        serde_json::to_writer(&mut out, &event).context("failed to encode wizard event")?;
        writeln!(out).context("failed to write wizard event")?;
    }

    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
