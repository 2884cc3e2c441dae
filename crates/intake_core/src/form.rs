//! Answers accumulated by the earlier wizard steps and the per-step rules
//! that decide whether the wizard may move on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::{
    domain::{ExistingProject, Step, ToolId},
    error::IntakeError,
    protocol::ProjectDetails,
};

use crate::roster::RosterStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub existing_project: Option<ExistingProject>,
}

impl Classification {
    pub fn creates_new_project(&self) -> bool {
        self.existing_project == Some(ExistingProject::No)
    }
}

/// Tools selected for the project, each with its hosting platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfiguration {
    selected: BTreeMap<ToolId, String>,
}

impl ToolConfiguration {
    pub fn select(&mut self, tool: ToolId, platform: impl Into<String>) {
        self.selected.insert(tool, platform.into());
    }

    pub fn deselect(&mut self, tool: ToolId) -> bool {
        self.selected.remove(&tool).is_some()
    }

    pub fn platform(&self, tool: ToolId) -> Option<&str> {
        self.selected.get(&tool).map(String::as_str)
    }

    pub fn selected(&self) -> impl Iterator<Item = (ToolId, &str)> {
        self.selected
            .iter()
            .map(|(tool, platform)| (*tool, platform.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Read-only view over the whole draft, handed to validation and review.
#[derive(Debug, Clone, Copy)]
pub struct FormState<'a> {
    pub classification: &'a Classification,
    pub project: &'a ProjectDetails,
    pub tools: &'a ToolConfiguration,
    pub roster: &'a RosterStore,
}

/// Runs the rules of every step from Intro through `step` and reports the
/// first step that is incomplete.
pub(crate) fn validate_through(step: Step, form: &FormState<'_>) -> Result<(), IntakeError> {
    for candidate in Step::ALL.into_iter().take_while(|s| *s <= step) {
        let missing = missing_for(candidate, form);
        if !missing.is_empty() {
            return Err(IntakeError::ValidationIncomplete {
                step: candidate,
                missing,
            });
        }
    }
    Ok(())
}

fn missing_for(step: Step, form: &FormState<'_>) -> Vec<String> {
    let mut missing = Vec::new();
    match step {
        Step::Intro => {
            if form.classification.existing_project.is_none() {
                missing.push("existing_project".to_string());
            }
        }
        Step::ProjectDetails => project_gaps(form.project, &mut missing),
        Step::ToolConfiguration => {
            if form.tools.is_empty() {
                missing.push("tools".to_string());
            }
        }
        Step::AccessApproval => {
            if form.roster.is_empty() {
                missing.push("roster".to_string());
            }
            for entry in form.roster.entries() {
                if entry.entitlements().is_empty() {
                    missing.push(format!("entitlements:{}", entry.email()));
                }
            }
            for role in form.roster.approvers().unassigned() {
                missing.push(format!("approver:{}", role.label()));
            }
        }
        Step::ReviewSubmit => {
            if !form.roster.memo().attested() {
                missing.push("attestation".to_string());
            }
        }
        Step::SubmissionSuccess => {}
    }
    missing
}

fn project_gaps(project: &ProjectDetails, missing: &mut Vec<String>) {
    if project.code_name.trim().is_empty() {
        missing.push("code_name".to_string());
    }
    if project.project_type.trim().is_empty() {
        missing.push("project_type".to_string());
    }
    if project.start_date.is_none() {
        missing.push("start_date".to_string());
    }
    if project.end_date.is_none() {
        missing.push("end_date".to_string());
    }
    if let (Some(start), Some(end)) = (project.start_date, project.end_date) {
        if end < start {
            missing.push("end_date_before_start_date".to_string());
        }
    }
    if project.personal_data.is_none() {
        missing.push("personal_data".to_string());
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
