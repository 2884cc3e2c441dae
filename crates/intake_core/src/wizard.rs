//! Step state machine for the intake wizard.
//!
//! The transition table below is the only place that decides where
//! `advance` and `go_back` lead; the title/description shown for a step is
//! looked up from the step itself and never assigned separately.

use shared::{domain::Step, error::IntakeError};
use tracing::debug;

use crate::form::{self, FormState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMeta {
    pub title: &'static str,
    pub description: &'static str,
}

fn next_step(step: Step) -> Step {
    match step {
        Step::Intro => Step::ProjectDetails,
        Step::ProjectDetails => Step::ToolConfiguration,
        Step::ToolConfiguration => Step::AccessApproval,
        Step::AccessApproval => Step::ReviewSubmit,
        Step::ReviewSubmit => Step::SubmissionSuccess,
        Step::SubmissionSuccess => Step::SubmissionSuccess,
    }
}

fn prev_step(step: Step) -> Step {
    match step {
        Step::Intro => Step::Intro,
        Step::ProjectDetails => Step::Intro,
        Step::ToolConfiguration => Step::ProjectDetails,
        Step::AccessApproval => Step::ToolConfiguration,
        Step::ReviewSubmit => Step::AccessApproval,
        // terminal: no way back out of the success view
        Step::SubmissionSuccess => Step::SubmissionSuccess,
    }
}

#[derive(Debug, Clone)]
pub struct WizardController {
    step: Step,
    meta: Option<StepMeta>,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            step: Step::Intro,
            meta: Self::metadata(Step::Intro),
        }
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    /// Metadata of the current step, computed once when the step was entered.
    pub fn current_meta(&self) -> Option<StepMeta> {
        self.meta
    }

    /// Title and description for `step`. The success view has none.
    pub fn metadata(step: Step) -> Option<StepMeta> {
        let meta = match step {
            Step::Intro => StepMeta {
                title: "Request Classification",
                description:
                    "Answer the questions below to route your request to the appropriate workflow.",
            },
            Step::ProjectDetails => StepMeta {
                title: "Project Details",
                description:
                    "Provide project details to initiate setup. This process may take a few minutes.",
            },
            Step::ToolConfiguration => StepMeta {
                title: "Tool Configuration",
                description: "Select and configure the tools required for this project. You can request custom tools or choose from approved, recommended tools.",
            },
            Step::AccessApproval => StepMeta {
                title: "Approval & Access",
                description: "Define approvers and assign user access for the selected tools. This step may take a few minutes.",
            },
            Step::ReviewSubmit => StepMeta {
                title: "Review & Submit",
                description:
                    "Review all details below before submitting this request for approval.",
            },
            Step::SubmissionSuccess => return None,
        };
        Some(meta)
    }

    pub fn advance(&mut self) -> Step {
        self.transition(next_step(self.step))
    }

    pub fn go_back(&mut self) -> Step {
        self.transition(prev_step(self.step))
    }

    pub fn reset(&mut self) -> Step {
        self.transition(Step::Intro)
    }

    /// Checks every rule up to and including `step` against the draft.
    pub fn check_advance(step: Step, form: &FormState<'_>) -> Result<(), IntakeError> {
        form::validate_through(step, form)
    }

    pub fn can_advance(step: Step, form: &FormState<'_>) -> bool {
        Self::check_advance(step, form).is_ok()
    }

    /// Advances only if the current step's rules pass; the step is unchanged
    /// otherwise.
    pub fn try_advance(&mut self, form: &FormState<'_>) -> Result<Step, IntakeError> {
        Self::check_advance(self.step, form)?;
        Ok(self.advance())
    }

    fn transition(&mut self, to: Step) -> Step {
        if to != self.step {
            debug!(from = %self.step, to = %to, "wizard step transition");
            self.step = to;
        }
        self.meta = Self::metadata(to);
        self.step
    }
}

#[cfg(test)]
#[path = "tests/wizard_tests.rs"]
mod tests;
