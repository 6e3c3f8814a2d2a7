//! cipherchain - chain classical ciphers and text edits, stage by stage

pub mod cli;
pub mod core;
pub mod execution;
pub mod transform;

// Re-export commonly used types
pub use core::{create_default_step, Operation, OperationKind, Pipeline, PipelineError, Step, StepId};
pub use execution::{run, ExecutionEngine, ExecutionEvent, ExecutionResult, StageOutput};
pub use transform::{CaseMode, Mode};
