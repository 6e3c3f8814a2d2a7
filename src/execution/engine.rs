//! Execution engine - runs a pipeline and reports progress to event handlers

use crate::core::{Step, StepId};
use crate::execution::executor::{self, ExecutionResult};
use std::sync::Arc;
use tracing::info;

/// Events that can occur during pipeline execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionEvent {
    PipelineStarted {
        total_steps: usize,
        input_len: usize,
    },
    StageCompleted {
        index: usize,
        total_steps: usize,
        step_id: StepId,
        label: String,
        output: String,
    },
    PipelineCompleted {
        final_output: String,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(&ExecutionEvent) + Send + Sync>;

/// Pipeline execution engine
///
/// Holds no state between runs apart from its handlers; the result of
/// [`ExecutionEngine::execute`] is always the same as [`executor::run`].
#[derive(Clone, Default)]
pub struct ExecutionEngine {
    event_handlers: Vec<EventHandler>,
}

impl ExecutionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(&ExecutionEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
    }

    /// Emit an event to all handlers
    fn emit_event(&self, event: ExecutionEvent) {
        for handler in &self.event_handlers {
            handler(&event);
        }
    }

    /// Execute `steps` over `input`
    pub fn execute(&self, input: &str, steps: &[Step]) -> ExecutionResult {
        let total_steps = steps.len();
        info!("Running pipeline with {} step(s)", total_steps);

        self.emit_event(ExecutionEvent::PipelineStarted {
            total_steps,
            input_len: input.chars().count(),
        });

        let result = executor::run_with(input, steps, |index, stage| {
            self.emit_event(ExecutionEvent::StageCompleted {
                index,
                total_steps,
                step_id: stage.step_id,
                label: stage.label.clone(),
                output: stage.output.clone(),
            });
        });

        self.emit_event(ExecutionEvent::PipelineCompleted {
            final_output: result.final_output.clone(),
        });

        result
    }
}

impl std::fmt::Debug for ExecutionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionEngine")
            .field("event_handlers", &self.event_handlers.len())
            .finish()
    }
}
