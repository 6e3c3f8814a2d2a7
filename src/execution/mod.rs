//! Pipeline execution

pub mod engine;
pub mod executor;

pub use engine::{EventHandler, ExecutionEngine, ExecutionEvent};
pub use executor::{run, run_with, ExecutionResult, StageOutput};
