//! CLI command definitions

use crate::core::OperationKind;
use clap::Args;

/// Run a pipeline
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to pipeline YAML file
    #[arg(short, long, conflicts_with = "step")]
    pub file: Option<String>,

    /// Inline step, `kind[:key=value,...]` (repeatable, applied in order);
    /// write `\,` for a comma inside a value
    #[arg(long)]
    pub step: Vec<String>,

    /// Input text (read from stdin when omitted and the pipeline has none)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Print only the final output
    #[arg(long, conflicts_with = "json")]
    pub final_only: bool,

    /// Truncate intermediate stage previews to this many characters
    #[arg(long)]
    pub max_chars: Option<usize>,
}

/// Validate a pipeline configuration
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to pipeline YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Show default step parameters
#[derive(Debug, Args, Clone)]
pub struct DefaultsCommand {
    /// Operation kind; all kinds when omitted
    pub kind: Option<OperationKind>,
}
