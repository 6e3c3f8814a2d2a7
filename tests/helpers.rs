//! Test utility functions for cipherchain
#![allow(dead_code)]

use cipherchain::core::config::PipelineConfig;
use cipherchain::core::{Operation, Pipeline};
use cipherchain::execution::ExecutionResult;

/// Sample texts used by the round-trip scenarios
pub const SAMPLES: &[&str] = &[
    "",
    "a",
    "Hello World",
    "WEAREDISCOVEREDFLEEATONCE",
    "The quick brown fox jumps over the lazy dog.",
    "MiXeD cAsE with digits 0123456789 and symbols !@#$%^&*()",
    "Ünïcödé, 漢字 and emoji ✓ survive",
    "line one\nline two\ttabbed",
];

/// Texts made of ASCII letters only
pub const LETTER_SAMPLES: &[&str] = &[
    "a",
    "Z",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "AttackAtDawn",
    "TheQuickBrownFoxJumpsOverTheLazyDog",
];

/// Build a pipeline from a YAML document
pub fn pipeline_from_yaml(yaml: &str) -> Pipeline {
    PipelineConfig::from_yaml(yaml)
        .expect("Should parse YAML")
        .to_pipeline()
}

/// Run a single operation over `text`
pub fn apply(operation: Operation, text: &str) -> String {
    Pipeline::from_operations(vec![operation]).run(text).final_output
}

/// Assert the stage outputs of a run
pub fn assert_stages(result: &ExecutionResult, expected: &[&str]) {
    assert_eq!(
        result.stage_outputs(),
        expected.to_vec(),
        "stage outputs differ"
    );
    assert_eq!(
        result.final_output,
        expected.last().copied().unwrap_or_default(),
        "final output should equal the last stage"
    );
}
