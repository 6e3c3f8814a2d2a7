//! Errors raised when editing a pipeline

use crate::core::step::{OperationKind, StepId};
use thiserror::Error;

/// Error types for pipeline editing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Step {0} not found")]
    StepNotFound(StepId),

    #[error("Step {id} is a {expected} step, cannot change it to {found}")]
    KindMismatch {
        id: StepId,
        expected: OperationKind,
        found: OperationKind,
    },

    #[error("Unknown operation kind: {0}")]
    UnknownKind(String),
}
