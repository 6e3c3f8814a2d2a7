//! Step executor - folds the operation library over a step list

use crate::core::{Step, StepId};
use serde::Serialize;
use tracing::debug;

/// Output of one stage: the result of applying every step up to and
/// including `step_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageOutput {
    pub step_id: StepId,
    pub label: String,
    pub output: String,
}

/// Result of running a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// One entry per step, in order
    pub stages: Vec<StageOutput>,

    /// Output of the last stage, or the input when there are no steps
    pub final_output: String,
}

impl ExecutionResult {
    /// Stage outputs in order
    pub fn stage_outputs(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.output.as_str()).collect()
    }
}

/// Run `steps` over `input`
///
/// Each step sees only its predecessor's output. The run is pure: identical
/// arguments always produce identical results.
pub fn run(input: &str, steps: &[Step]) -> ExecutionResult {
    run_with(input, steps, |_, _| {})
}

/// Like [`run`], calling `on_stage` with the stage index and output as each
/// step finishes
pub fn run_with<F>(input: &str, steps: &[Step], mut on_stage: F) -> ExecutionResult
where
    F: FnMut(usize, &StageOutput),
{
    let mut stages: Vec<StageOutput> = Vec::with_capacity(steps.len());

    for (index, step) in steps.iter().enumerate() {
        let previous = stages.last().map_or(input, |s| s.output.as_str());
        let output = step.apply(previous);
        debug!(
            "Stage {} ({}): {} -> {} chars",
            index + 1,
            step.id,
            previous.chars().count(),
            output.chars().count()
        );

        let stage = StageOutput {
            step_id: step.id,
            label: step.describe(),
            output,
        };
        on_stage(index, &stage);
        stages.push(stage);
    }

    let final_output = stages
        .last()
        .map_or_else(|| input.to_string(), |s| s.output.clone());

    ExecutionResult {
        stages,
        final_output,
    }
}
