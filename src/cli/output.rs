//! CLI output formatting

use crate::core::config::StepConfig;
use crate::execution::{ExecutionResult, StageOutput};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ARROW: Emoji<'_, '_> = Emoji("➜ ", "> ");

/// Format a stage header, e.g. `[2/3] reverse (#4)`
pub fn format_stage_header(index: usize, total: usize, stage: &StageOutput) -> String {
    format!(
        "[{}/{}] {} {}",
        style(index + 1).cyan(),
        style(total).dim(),
        style(&stage.label).bold(),
        style(format!("({})", stage.step_id)).dim()
    )
}

/// Format the final output line
pub fn format_final_output(output: &str) -> String {
    format!("{}{}", ARROW, style(output).green())
}

/// Format a step config as a one-line summary for `validate`
pub fn format_step_config(index: usize, step: &StepConfig) -> String {
    let operation = step.to_operation();
    format!("  {}. {}", index + 1, style(operation.describe()).cyan())
}

/// Execution result as pretty-printed JSON
pub fn format_result_json(result: &ExecutionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Truncate `output` to at most `max_chars` characters for previews
pub fn truncate_chars(output: &str, max_chars: usize) -> String {
    let count = output.chars().count();
    if count <= max_chars {
        return output.to_string();
    }
    let kept: String = output.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}
