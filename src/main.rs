use anyhow::{Context, Result};
use cipherchain::cli::commands::{DefaultsCommand, RunCommand, ValidateCommand};
use cipherchain::cli::output::*;
use cipherchain::cli::terminal_output::StageDisplay;
use cipherchain::cli::{Cli, Command};
use cipherchain::core::config::{PipelineConfig, StepConfig};
use cipherchain::core::{Operation, OperationKind};
use cipherchain::execution::ExecutionEngine;
use std::io::{self, IsTerminal, Read};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Run(cmd) => run_pipeline(cmd)?,
        Command::Validate(cmd) => validate_pipeline(cmd)?,
        Command::Defaults(cmd) => show_defaults(cmd)?,
    }

    Ok(())
}

/// Resolve the pipeline from `--file`, `--step` or the default config file
fn load_config(cmd: &RunCommand) -> Result<PipelineConfig> {
    if let Some(file) = &cmd.file {
        return PipelineConfig::from_file(file).context("Failed to load pipeline config");
    }
    if !cmd.step.is_empty() {
        return PipelineConfig::from_inline_steps(&cmd.step);
    }
    match PipelineConfig::default_path() {
        Some(path) if path.exists() => {
            debug!("Using default pipeline file {}", path.display());
            PipelineConfig::from_file(&path).context("Failed to load default pipeline config")
        }
        _ => {
            debug!("No pipeline given, using the default step");
            Ok(PipelineConfig::default())
        }
    }
}

fn read_input(cmd: &RunCommand, config: &PipelineConfig) -> Result<String> {
    if let Some(input) = cmd.input.as_ref().or(config.input.as_ref()) {
        return Ok(input.clone());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("{} Reading input from stdin, end with Ctrl-D", INFO);
    }
    let mut input = String::new();
    stdin
        .lock()
        .read_to_string(&mut input)
        .context("Failed to read input from stdin")?;

    // A single trailing newline comes from the shell, not the text
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

fn run_pipeline(cmd: &RunCommand) -> Result<()> {
    let config = load_config(cmd)?;
    let pipeline = config.to_pipeline();
    let input = read_input(cmd, &config)?;

    let mut engine = ExecutionEngine::new();
    if !cmd.json {
        let mut display = StageDisplay::new(cmd.final_only);
        if let Some(max) = cmd.max_chars {
            display = display.with_max_chars(max);
        }
        engine.add_event_handler(move |event| display.on_event(event));
    }

    let result = engine.execute(&input, &pipeline.snapshot());

    if cmd.json {
        println!("{}", format_result_json(&result)?);
    }

    Ok(())
}

fn validate_pipeline(cmd: &ValidateCommand) -> Result<()> {
    let result = PipelineConfig::from_file(&cmd.file);

    match result {
        Ok(config) => {
            let normalized = config.normalized();
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&normalized)?);
                return Ok(());
            }

            println!("{} Pipeline configuration is valid!", CHECK);
            if let Some(name) = &normalized.name {
                println!("  Name: {}", style(name).bold());
            }
            println!("  Steps: {}", style(normalized.steps.len()).cyan());
            for (i, step) in normalized.steps.iter().enumerate() {
                println!("{}", format_step_config(i, step));
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(format!("{:#}", e)).red());
            std::process::exit(1);
        }
    }
}

fn show_defaults(cmd: &DefaultsCommand) -> Result<()> {
    let kinds: Vec<OperationKind> = match cmd.kind {
        Some(kind) => vec![kind],
        None => OperationKind::ALL.to_vec(),
    };

    let defaults = PipelineConfig {
        name: None,
        input: None,
        steps: kinds
            .into_iter()
            .map(|kind| StepConfig::from_operation(&Operation::default_for(kind)))
            .collect(),
    };
    print!("{}", defaults.to_yaml()?);

    Ok(())
}
