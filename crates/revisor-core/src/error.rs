//! Error types and exit codes for revisor
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, empty batch)
//! - 3: Data error (unreadable configuration, invalid rubric)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid config or rubric (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during revisor operations
#[derive(Error, Debug)]
pub enum RevisorError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("no documents to evaluate: supply at least one document")]
    EmptyBatch,

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid rubric: {reason}")]
    InvalidRubric { reason: String },

    #[error("invalid configuration in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RevisorError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RevisorError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        RevisorError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RevisorError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a rubric that failed validation
    pub fn invalid_rubric(reason: impl Into<String>) -> Self {
        RevisorError::InvalidRubric {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RevisorError::UnknownFormat(_)
            | RevisorError::UsageError(_)
            | RevisorError::EmptyBatch
            | RevisorError::InvalidValue { .. } => ExitCode::Usage,

            RevisorError::InvalidRubric { .. } | RevisorError::InvalidConfig { .. } => {
                ExitCode::Data
            }

            RevisorError::Io(_)
            | RevisorError::Json(_)
            | RevisorError::FailedOperation { .. }
            | RevisorError::FailedOperationWithTarget { .. }
            | RevisorError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RevisorError::UnknownFormat(_) => "unknown_format",
            RevisorError::UsageError(_) => "usage_error",
            RevisorError::EmptyBatch => "empty_batch",
            RevisorError::InvalidValue { .. } => "invalid_value",
            RevisorError::InvalidRubric { .. } => "invalid_rubric",
            RevisorError::InvalidConfig { .. } => "invalid_config",
            RevisorError::Io(_) => "io_error",
            RevisorError::Json(_) => "json_error",
            RevisorError::FailedOperation { .. } => "failed_operation",
            RevisorError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RevisorError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for revisor operations
pub type Result<T> = std::result::Result<T, RevisorError>;
