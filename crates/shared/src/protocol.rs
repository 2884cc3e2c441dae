use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::{ApproverRole, EntryId, ExistingProject, Step, ToolId},
    error::ErrorReport,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ertm_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sap_id: Option<String>,
    #[serde(default)]
    pub code_name: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One presentation-layer call against the draft. Roster rows are addressed
/// by email and resolved to their stable entry id by the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WizardAction {
    Advance,
    Back,
    Reset,
    SetExistingProject {
        answer: ExistingProject,
    },
    SetProjectDetails {
        details: ProjectDetails,
    },
    SelectTool {
        tool: ToolId,
        platform: String,
    },
    DeselectTool {
        tool: ToolId,
    },
    AddUser {
        email: String,
        #[serde(default)]
        tools: Vec<String>,
    },
    RemoveUser {
        email: String,
    },
    ToggleTool {
        email: String,
        tool: String,
    },
    ToggleExpanded {
        email: String,
    },
    SetApprover {
        role: String,
        identity: String,
    },
    SetMemo {
        text: String,
    },
    SetAttestation {
        attested: bool,
    },
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub request_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WizardEvent {
    StepChanged {
        step: Step,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    DraftUpdated,
    RosterChanged {
        entries: usize,
    },
    EntryUpdated {
        entry_id: EntryId,
        email: String,
        entitlements: Vec<ToolId>,
        expanded: bool,
    },
    ApproverAssigned {
        role: ApproverRole,
        identity: String,
    },
    MemoStored {
        text: String,
        length: usize,
    },
    Rejected {
        error: ErrorReport,
    },
    Submitted {
        receipt: SubmissionReceipt,
    },
}
