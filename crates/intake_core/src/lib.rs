//! Core of the non-client project intake wizard: the step state machine and
//! the access roster, plus the draft views built on top of them.

pub mod approvals;
pub mod email;
pub mod form;
pub mod memo;
pub mod review;
pub mod roster;
pub mod submit;
pub mod wizard;

pub use approvals::ApproverAssignment;
pub use email::{display_name_from_email, suggest_emails, validate_email};
pub use form::{Classification, FormState, ToolConfiguration};
pub use memo::{Memo, MEMO_MAX_CHARS};
pub use review::{DraftSnapshot, ReviewSummary};
pub use roster::{RosterEntry, RosterStore};
pub use submit::{submit_draft, DraftSubmitter, SubmitError};
pub use wizard::{StepMeta, WizardController};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
