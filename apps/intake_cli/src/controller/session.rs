//! One wizard session: the step controller and the roster composed with the
//! rest of the draft. Neither core component calls the other; this is the
//! layer that feeds the draft into `can_advance` and the review.

use intake_core::{
    submit_draft, Classification, DraftSubmitter, FormState, ReviewSummary, RosterStore,
    SubmitError, ToolConfiguration, WizardController,
};
use shared::{
    domain::{ApproverRole, EntryId, Step, ToolId},
    error::{ErrorCode, ErrorReport, IntakeError},
    protocol::{ProjectDetails, WizardAction, WizardEvent},
};
use tracing::debug;

#[derive(Debug, Default)]
pub struct IntakeSession {
    wizard: WizardController,
    classification: Classification,
    project: ProjectDetails,
    tools: ToolConfiguration,
    roster: RosterStore,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.wizard.current_step()
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn form(&self) -> FormState<'_> {
        FormState {
            classification: &self.classification,
            project: &self.project,
            tools: &self.tools,
            roster: &self.roster,
        }
    }

    pub fn review(&self) -> ReviewSummary {
        ReviewSummary::from_form(&self.form())
    }

    /// Applies one action. Rejections come back as events and leave the
    /// draft untouched.
    pub async fn apply(
        &mut self,
        action: WizardAction,
        submitter: &dyn DraftSubmitter,
    ) -> WizardEvent {
        debug!(?action, step = %self.step(), "applying wizard action");
        match action {
            WizardAction::Advance if self.step() == Step::ReviewSubmit => {
                self.submit(submitter).await
            }
            WizardAction::Submit => self.submit(submitter).await,
            other => self.apply_local(other).unwrap_or_else(rejected),
        }
    }

    fn apply_local(&mut self, action: WizardAction) -> Result<WizardEvent, IntakeError> {
        let event = match action {
            WizardAction::Advance | WizardAction::Submit => {
                let form = FormState {
                    classification: &self.classification,
                    project: &self.project,
                    tools: &self.tools,
                    roster: &self.roster,
                };
                self.wizard.try_advance(&form)?;
                self.step_changed()
            }
            WizardAction::Back => {
                self.wizard.go_back();
                self.step_changed()
            }
            WizardAction::Reset => {
                *self = Self::new();
                self.step_changed()
            }
            WizardAction::SetExistingProject { answer } => {
                self.classification.existing_project = Some(answer);
                WizardEvent::DraftUpdated
            }
            WizardAction::SetProjectDetails { details } => {
                self.project = details;
                WizardEvent::DraftUpdated
            }
            WizardAction::SelectTool { tool, platform } => {
                self.tools.select(tool, platform);
                WizardEvent::DraftUpdated
            }
            WizardAction::DeselectTool { tool } => {
                self.tools.deselect(tool);
                WizardEvent::DraftUpdated
            }
            WizardAction::AddUser { email, tools } => {
                let tools = tools
                    .iter()
                    .map(|raw| raw.parse::<ToolId>())
                    .collect::<Result<Vec<_>, _>>()?;
                let entry = self.roster.add_user(&email, tools)?;
                self.entry_updated(entry.id())
            }
            WizardAction::RemoveUser { email } => {
                let id = self.resolve(&email)?;
                self.roster.remove_user(id)?;
                WizardEvent::RosterChanged {
                    entries: self.roster.len(),
                }
            }
            WizardAction::ToggleTool { email, tool } => {
                let tool: ToolId = tool.parse()?;
                let id = self.resolve(&email)?;
                self.roster.toggle_tool(id, tool)?;
                self.entry_updated(id)
            }
            WizardAction::ToggleExpanded { email } => {
                let id = self.resolve(&email)?;
                self.roster.toggle_expanded(id)?;
                self.entry_updated(id)
            }
            WizardAction::SetApprover { role, identity } => {
                let role: ApproverRole = role.parse()?;
                self.roster.assign_approver(role, &identity);
                WizardEvent::ApproverAssigned {
                    role,
                    identity: self.roster.approvers().get(role).to_string(),
                }
            }
            WizardAction::SetMemo { text } => {
                let stored = self.roster.set_memo(&text).to_string();
                WizardEvent::MemoStored {
                    length: stored.chars().count(),
                    text: stored,
                }
            }
            WizardAction::SetAttestation { attested } => {
                self.roster.set_attestation(attested);
                WizardEvent::DraftUpdated
            }
        };
        Ok(event)
    }

    async fn submit(&mut self, submitter: &dyn DraftSubmitter) -> WizardEvent {
        let form = FormState {
            classification: &self.classification,
            project: &self.project,
            tools: &self.tools,
            roster: &self.roster,
        };
        match submit_draft(&mut self.wizard, &form, submitter).await {
            Ok(receipt) => WizardEvent::Submitted { receipt },
            Err(SubmitError::Rejected(err)) => rejected(err),
            Err(err @ SubmitError::NotAtReview { .. }) => WizardEvent::Rejected {
                error: ErrorReport::new(ErrorCode::ValidationIncomplete, err.to_string()),
            },
            Err(err @ SubmitError::Failed(_)) => WizardEvent::Rejected {
                error: ErrorReport::new(ErrorCode::SubmissionFailed, err.to_string()),
            },
        }
    }

    fn resolve(&self, email: &str) -> Result<EntryId, IntakeError> {
        self.roster
            .find_by_email(email)
            .map(|entry| entry.id())
            .ok_or_else(|| IntakeError::NotFound {
                identity: email.trim().to_string(),
            })
    }

    fn step_changed(&self) -> WizardEvent {
        WizardEvent::StepChanged {
            step: self.wizard.current_step(),
            title: self.wizard.current_meta().map(|meta| meta.title.to_string()),
        }
    }

    fn entry_updated(&self, id: EntryId) -> WizardEvent {
        match self.roster.get(id) {
            Some(entry) => WizardEvent::EntryUpdated {
                entry_id: id,
                email: entry.email().to_string(),
                entitlements: entry.entitlements().iter().copied().collect(),
                expanded: self.roster.is_expanded(id),
            },
            None => WizardEvent::RosterChanged {
                entries: self.roster.len(),
            },
        }
    }
}

fn rejected(err: IntakeError) -> WizardEvent {
    WizardEvent::Rejected {
        error: ErrorReport::from(err),
    }
}

#[cfg(test)]
#[path = "../tests/session_tests.rs"]
mod tests;
