//! Error Types
//!
//! Failures surfaced by the API client and the action handlers built on it.

use thiserror::Error;

use crate::due_date::DueDateError;
use crate::models::ValidationErrors;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never got a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// 401: no session
    #[error("not authenticated")]
    Unauthorized,
    /// 422 with a field error body
    #[error("validation failed: {}", .0.messages().join(", "))]
    Validation(ValidationErrors),
    /// Any other non-2xx status
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// JSON that could not be encoded or decoded
    #[error("malformed JSON: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Failure of the task create/edit forms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskFormError {
    #[error("title is empty")]
    EmptyTitle,
    #[error(transparent)]
    DueDate(#[from] DueDateError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Failure of the registration flow
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegisterError {
    #[error("password confirmation does not match")]
    PasswordMismatch,
    #[error(transparent)]
    Api(#[from] ApiError),
}
