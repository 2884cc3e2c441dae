//! Review-step projection of the live draft and the owned snapshot taken at
//! submission time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    domain::{ApproverRole, EntryId, ToolId},
    protocol::ProjectDetails,
};

use crate::{
    approvals::ApproverAssignment,
    form::{Classification, FormState, ToolConfiguration},
    memo::{Memo, MEMO_MAX_CHARS},
    roster::RosterEntry,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolRow {
    pub tool: ToolId,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApproverRow {
    pub role: ApproverRole,
    pub title: &'static str,
    pub identity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCheck {
    pub tool: ToolId,
    pub granted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRow {
    pub entry_id: EntryId,
    pub name: String,
    pub email: String,
    pub access_label: String,
    pub tools: Vec<ToolCheck>,
    pub expanded: bool,
}

pub fn access_label(entry: &RosterEntry) -> String {
    let granted = entry.entitlements().len();
    if granted == ToolId::ALL.len() {
        format!("Full Access ({granted} Tools)")
    } else {
        format!("Access ({granted} Tools)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub classification: Classification,
    pub creates_new_project: bool,
    pub project: ProjectDetails,
    pub tools: Vec<ToolRow>,
    pub approvers: Vec<ApproverRow>,
    pub access: Vec<AccessRow>,
    pub memo: String,
    pub memo_remaining: usize,
    pub memo_limit: usize,
    pub attested: bool,
}

impl ReviewSummary {
    pub fn from_form(form: &FormState<'_>) -> Self {
        let roster = form.roster;
        Self {
            classification: *form.classification,
            creates_new_project: form.classification.creates_new_project(),
            project: form.project.clone(),
            tools: form
                .tools
                .selected()
                .map(|(tool, platform)| ToolRow {
                    tool,
                    platform: platform.to_string(),
                })
                .collect(),
            approvers: roster
                .approvers()
                .iter()
                .map(|(role, identity)| ApproverRow {
                    role,
                    title: role.label(),
                    identity: identity.to_string(),
                })
                .collect(),
            access: roster
                .entries()
                .iter()
                .map(|entry| AccessRow {
                    entry_id: entry.id(),
                    name: entry.display_name().to_string(),
                    email: entry.email().to_string(),
                    access_label: access_label(entry),
                    tools: ToolId::ALL
                        .into_iter()
                        .map(|tool| ToolCheck {
                            tool,
                            granted: entry.has_tool(tool),
                        })
                        .collect(),
                    expanded: roster.is_expanded(entry.id()),
                })
                .collect(),
            memo: roster.memo().text().to_string(),
            memo_remaining: roster.memo().remaining(),
            memo_limit: MEMO_MAX_CHARS,
            attested: roster.memo().attested(),
        }
    }
}

/// Owned copy of the draft. Edits made after capture never reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub classification: Classification,
    pub project: ProjectDetails,
    pub tools: ToolConfiguration,
    pub entries: Vec<RosterEntry>,
    pub approvers: ApproverAssignment,
    pub memo: Memo,
    pub captured_at: DateTime<Utc>,
}

impl DraftSnapshot {
    pub fn capture(form: &FormState<'_>) -> Self {
        Self {
            classification: *form.classification,
            project: form.project.clone(),
            tools: form.tools.clone(),
            entries: form.roster.entries().to_vec(),
            approvers: form.roster.approvers().clone(),
            memo: form.roster.memo().clone(),
            captured_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "tests/review_tests.rs"]
mod tests;
