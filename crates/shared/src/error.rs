use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{EntryId, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    DuplicateEntry,
    InvalidEmail,
    NotFound,
    UnknownRole,
    UnknownTool,
    ValidationIncomplete,
    SubmissionFailed,
}

/// Recoverable rejection of a draft mutation or transition.
///
/// The draft is left exactly as it was before the rejected call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("a roster entry for {email} already exists")]
    DuplicateEntry { email: String },
    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },
    #[error("no roster entry matches {identity}")]
    NotFound { identity: String },
    #[error("unknown approver role '{role}'")]
    UnknownRole { role: String },
    #[error("unknown tool '{tool}'")]
    UnknownTool { tool: String },
    #[error("step {step} is incomplete: missing {}", .missing.join(", "))]
    ValidationIncomplete { step: Step, missing: Vec<String> },
}

impl IntakeError {
    pub fn entry_not_found(id: EntryId) -> Self {
        Self::NotFound {
            identity: id.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            IntakeError::DuplicateEntry { .. } => ErrorCode::DuplicateEntry,
            IntakeError::InvalidEmail { .. } => ErrorCode::InvalidEmail,
            IntakeError::NotFound { .. } => ErrorCode::NotFound,
            IntakeError::UnknownRole { .. } => ErrorCode::UnknownRole,
            IntakeError::UnknownTool { .. } => ErrorCode::UnknownTool,
            IntakeError::ValidationIncomplete { .. } => ErrorCode::ValidationIncomplete,
        }
    }
}

/// Renderable form of an [`IntakeError`] for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&IntakeError> for ErrorReport {
    fn from(value: &IntakeError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}

impl From<IntakeError> for ErrorReport {
    fn from(value: IntakeError) -> Self {
        Self::from(&value)
    }
}
