//! Terminal display of stage outputs as a pipeline runs
//!
//! [`StageDisplay`] is registered as an [`ExecutionEngine`] event handler and
//! prints a header and the output of every stage as soon as it is produced:
//!
//! ```text
//! [1/2] caesar (encode, shift 3) (#1)
//! Khoor Zruog
//! ────────────────────────────────
//! ```
//!
//! [`ExecutionEngine`]: crate::execution::ExecutionEngine

use crate::cli::output::{format_final_output, format_stage_header, style, truncate_chars};
use crate::execution::{ExecutionEvent, StageOutput};
use std::io::{self, Write};

/// Prints stage events to stdout
#[derive(Debug, Clone)]
pub struct StageDisplay {
    /// Stage outputs longer than this many characters are truncated
    max_chars: Option<usize>,
    /// Only print the final output
    final_only: bool,
}

impl StageDisplay {
    pub fn new(final_only: bool) -> Self {
        Self {
            max_chars: None,
            final_only,
        }
    }

    /// Truncate long stage previews (the final output is never truncated)
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    /// Print a separator line spanning the terminal width
    fn print_separator(&self) {
        // Get terminal width, default to 80 if unavailable
        let width = term_size::dimensions_stdout()
            .map(|(w, _)| w)
            .unwrap_or(80);
        println!("{}", style("─".repeat(width)).dim());
    }

    fn flush_stdout(&self) {
        let _ = io::stdout().flush();
    }

    fn render_stage(&self, index: usize, total: usize, stage: &StageOutput) -> String {
        let body = match self.max_chars {
            Some(max) => truncate_chars(&stage.output, max),
            None => stage.output.clone(),
        };
        format!("{}\n{}", format_stage_header(index, total, stage), body)
    }

    /// Handle one engine event
    pub fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::PipelineStarted { .. } => {}
            ExecutionEvent::StageCompleted {
                index,
                total_steps,
                step_id,
                label,
                output,
            } => {
                if self.final_only {
                    return;
                }
                let stage = StageOutput {
                    step_id: *step_id,
                    label: label.clone(),
                    output: output.clone(),
                };
                println!("{}", self.render_stage(*index, *total_steps, &stage));
                self.print_separator();
                self.flush_stdout();
            }
            ExecutionEvent::PipelineCompleted { final_output } => {
                if self.final_only {
                    println!("{}", final_output);
                } else {
                    println!("{}", format_final_output(final_output));
                }
                self.flush_stdout();
            }
        }
    }
}
