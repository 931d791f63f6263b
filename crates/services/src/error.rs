//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::model::ResultError;
use storage::StorageError;

/// Errors emitted by the exam session and its controller.
///
/// Every variant is recoverable: a failed operation leaves state exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("questions are not loaded yet")]
    DataNotReady,
    #[error("invalid exam configuration: {0}")]
    InvalidConfiguration(String),
    #[error("exam already submitted")]
    SessionClosed,
    #[error("failed to load questions: {0}")]
    LoadFailure(String),
    #[error("no exam in progress")]
    NotStarted,
    #[error("an exam is already running")]
    AlreadyStarted,
    #[error("question {index} is out of range for {total} questions")]
    OutOfRange { index: usize, total: usize },
    #[error("option {index} is out of range for {options} options")]
    InvalidOption { index: usize, options: usize },
}

impl From<ResultError> for ExamError {
    fn from(err: ResultError) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}

impl From<&StorageError> for ExamError {
    fn from(err: &StorageError) -> Self {
        Self::LoadFailure(err.to_string())
    }
}
