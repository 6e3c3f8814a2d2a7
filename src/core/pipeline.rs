//! Pipeline domain model

use crate::core::{
    error::PipelineError,
    step::{Operation, OperationKind, Step, StepId},
};
use crate::execution::{self, ExecutionResult};
use tracing::debug;

/// Kind of the step a fresh or reset pipeline starts with
pub const DEFAULT_KIND: OperationKind = OperationKind::Caesar;

/// An ordered, never-empty list of steps plus the id counter that feeds it
///
/// Owned by the caller. Ids increase monotonically and are never handed out
/// twice, even across removals and resets.
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Pipeline steps, in execution order
    steps: Vec<Step>,

    /// Next id to hand out
    next_id: u64,
}

impl Pipeline {
    /// Create a pipeline holding a single default step
    pub fn new() -> Self {
        let mut pipeline = Self {
            steps: Vec::new(),
            next_id: 1,
        };
        let step = pipeline.create_step(DEFAULT_KIND);
        pipeline.steps.push(step);
        pipeline
    }

    /// Build a pipeline from operations, assigning fresh ids in order
    ///
    /// An empty list yields the default pipeline.
    pub fn from_operations<I>(operations: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        let mut pipeline = Self {
            steps: Vec::new(),
            next_id: 1,
        };
        for operation in operations {
            let id = pipeline.allocate_id();
            pipeline.steps.push(Step::new(id, operation));
        }
        if pipeline.steps.is_empty() {
            let step = pipeline.create_step(DEFAULT_KIND);
            pipeline.steps.push(step);
        }
        pipeline
    }

    fn allocate_id(&mut self) -> StepId {
        let id = StepId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Allocate the next id and return a default step of `kind`
    ///
    /// The step is not added to the pipeline.
    pub fn create_step(&mut self, kind: OperationKind) -> Step {
        let id = self.allocate_id();
        Step::with_defaults(id, kind)
    }

    /// Steps in execution order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true: a pipeline always holds at least one step
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get a step by ID
    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Position of a step by ID
    pub fn position(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    /// Append a default step of `kind`
    pub fn push(&mut self, kind: OperationKind) -> StepId {
        let step = self.create_step(kind);
        let id = step.id;
        self.steps.push(step);
        id
    }

    /// Insert a default step of `kind` at `index` (clamped to the end)
    pub fn insert(&mut self, index: usize, kind: OperationKind) -> StepId {
        let step = self.create_step(kind);
        let id = step.id;
        let index = index.min(self.steps.len());
        self.steps.insert(index, step);
        id
    }

    /// Remove a step
    ///
    /// Removing the last remaining step leaves a single fresh default step.
    pub fn remove(&mut self, id: StepId) -> Result<Step, PipelineError> {
        let index = self.position(id).ok_or(PipelineError::StepNotFound(id))?;
        let removed = self.steps.remove(index);
        if self.steps.is_empty() {
            debug!("Removed last step {}, resetting pipeline", id);
            let step = self.create_step(DEFAULT_KIND);
            self.steps.push(step);
        }
        Ok(removed)
    }

    /// Replace a step's parameters; the kind must stay the same
    pub fn update(&mut self, id: StepId, operation: Operation) -> Result<(), PipelineError> {
        self.steps
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(PipelineError::StepNotFound(id))?
            .set_operation(operation)
    }

    /// Swap the steps at two indices; returns false if either is out of range
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.steps.len() || b >= self.steps.len() {
            return false;
        }
        self.steps.swap(a, b);
        true
    }

    /// Move a step one position earlier; no-op at the front
    pub fn move_up(&mut self, id: StepId) -> Result<bool, PipelineError> {
        let index = self.position(id).ok_or(PipelineError::StepNotFound(id))?;
        if index == 0 {
            return Ok(false);
        }
        Ok(self.swap(index, index - 1))
    }

    /// Move a step one position later; no-op at the back
    pub fn move_down(&mut self, id: StepId) -> Result<bool, PipelineError> {
        let index = self.position(id).ok_or(PipelineError::StepNotFound(id))?;
        Ok(self.swap(index, index + 1))
    }

    /// Drop every step and start over with a single default step
    pub fn reset(&mut self) {
        self.steps.clear();
        let step = self.create_step(DEFAULT_KIND);
        self.steps.push(step);
    }

    /// Independent copy of the step list for a single run
    pub fn snapshot(&self) -> Vec<Step> {
        self.steps.clone()
    }

    /// Run the pipeline over `input`
    pub fn run(&self, input: &str) -> ExecutionResult {
        execution::run(input, &self.steps)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
