use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IntakeError;

/// Stable identity of a roster entry, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Intro,
    ProjectDetails,
    ToolConfiguration,
    AccessApproval,
    ReviewSubmit,
    SubmissionSuccess,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Intro,
        Step::ProjectDetails,
        Step::ToolConfiguration,
        Step::AccessApproval,
        Step::ReviewSubmit,
        Step::SubmissionSuccess,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Intro => "intro",
            Step::ProjectDetails => "project_details",
            Step::ToolConfiguration => "tool_configuration",
            Step::AccessApproval => "access_approval",
            Step::ReviewSubmit => "review_submit",
            Step::SubmissionSuccess => "submission_success",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Step::SubmissionSuccess
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed catalog of tools a roster entry can be entitled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    TeamsSite,
    ToolBuilder,
    CompanyHealthCheck,
}

impl ToolId {
    pub const ALL: [ToolId; 3] = [ToolId::TeamsSite, ToolId::ToolBuilder, ToolId::CompanyHealthCheck];

    pub fn label(self) -> &'static str {
        match self {
            ToolId::TeamsSite => "Teams Site",
            ToolId::ToolBuilder => "Tool Builder",
            ToolId::CompanyHealthCheck => "Company Health Check",
        }
    }

    fn key(self) -> &'static str {
        match self {
            ToolId::TeamsSite => "teams_site",
            ToolId::ToolBuilder => "tool_builder",
            ToolId::CompanyHealthCheck => "company_health_check",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToolId {
    type Err = IntakeError;

    /// Accepts either the display label ("Teams Site") or the snake_case key.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        ToolId::ALL
            .into_iter()
            .find(|tool| {
                tool.label().eq_ignore_ascii_case(trimmed) || tool.key().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| IntakeError::UnknownTool {
                tool: trimmed.to_string(),
            })
    }
}

/// The six fixed approver roles; none may be added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproverRole {
    PrimaryPartner,
    SecondaryPartner,
    InformationOwner,
    DelegateInformationOwner,
    ProjectManager,
    Approvers,
}

impl ApproverRole {
    pub const ALL: [ApproverRole; 6] = [
        ApproverRole::PrimaryPartner,
        ApproverRole::SecondaryPartner,
        ApproverRole::InformationOwner,
        ApproverRole::DelegateInformationOwner,
        ApproverRole::ProjectManager,
        ApproverRole::Approvers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApproverRole::PrimaryPartner => "Primary PMD/Partner",
            ApproverRole::SecondaryPartner => "Secondary PMD/Partner",
            ApproverRole::InformationOwner => "Information Owner",
            ApproverRole::DelegateInformationOwner => "Delegate Information Owner",
            ApproverRole::ProjectManager => "Project Manager",
            ApproverRole::Approvers => "Approvers",
        }
    }

    fn key(self) -> &'static str {
        match self {
            ApproverRole::PrimaryPartner => "primary_partner",
            ApproverRole::SecondaryPartner => "secondary_partner",
            ApproverRole::InformationOwner => "information_owner",
            ApproverRole::DelegateInformationOwner => "delegate_information_owner",
            ApproverRole::ProjectManager => "project_manager",
            ApproverRole::Approvers => "approvers",
        }
    }
}

impl fmt::Display for ApproverRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApproverRole {
    type Err = IntakeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        ApproverRole::ALL
            .into_iter()
            .find(|role| {
                role.label().eq_ignore_ascii_case(trimmed) || role.key().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| IntakeError::UnknownRole {
                role: trimmed.to_string(),
            })
    }
}

/// Answer to "Do you have an existing project?" on the intro step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistingProject {
    Yes,
    No,
}

impl ExistingProject {
    pub fn description(self) -> &'static str {
        match self {
            ExistingProject::Yes => "Link to existing project",
            ExistingProject::No => "Create a new one",
        }
    }
}
