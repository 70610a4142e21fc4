//! Error types for repairflow
//!
//! Each error type has a corresponding error code for programmatic handling.
//! Prerequisite failures inside the workflow engine are plain values
//! (`PrerequisitesResult`); only the command surface turns a rejected
//! transition into an error.

use thiserror::Error;

/// Result type alias for repairflow operations
pub type Result<T> = std::result::Result<T, RepairflowError>;

/// Main error type for all repairflow operations
#[derive(Debug, Error)]
pub enum RepairflowError {
    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A stage name that is not part of the workflow
    #[error("Unknown stage: {0}")]
    UnknownStage(String),

    /// The workflow engine refused a transition
    #[error("Transition from {from} to {to} rejected: {}", .reasons.join("; "))]
    TransitionRejected {
        from: String,
        to: String,
        reasons: Vec<String>,
    },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl RepairflowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            RepairflowError::InvalidJson(_) => "INVALID_JSON",
            RepairflowError::FileNotFound(_) => "FILE_NOT_FOUND",
            RepairflowError::ConfigError(_) => "CONFIG_ERROR",
            RepairflowError::UnknownStage(_) => "UNKNOWN_STAGE",
            RepairflowError::TransitionRejected { .. } => "TRANSITION_REJECTED",
            RepairflowError::Io(_) => "IO_ERROR",
            RepairflowError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        RepairflowError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &RepairflowError) -> i32 {
    match error {
        RepairflowError::TransitionRejected { .. } => 2,
        _ => 1,
    }
}
