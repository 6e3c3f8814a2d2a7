//! Test: editing a pipeline between runs, the way an interactive host would

use crate::helpers::*;
use cipherchain::core::step::CaesarParams;
use cipherchain::core::validate::Shift;
use cipherchain::core::{create_default_step, Operation, OperationKind, Pipeline, PipelineError, StepId};
use cipherchain::execution::ExecutionEngine;
use cipherchain::Mode;
use std::sync::{Arc, Mutex};

#[test]
fn test_edit_reorder_and_rerun() {
    let mut pipeline = Pipeline::new();
    let caesar = pipeline.steps()[0].id;
    let reverse = pipeline.push(OperationKind::Reverse);
    assert_stages(&pipeline.run("abc"), &["def", "fed"]);

    // the shift comes from user text and is validated first
    pipeline
        .update(
            caesar,
            Operation::Caesar(CaesarParams {
                mode: Mode::Encode,
                shift: Shift::parse("1"),
                preserve_case: true,
            }),
        )
        .unwrap();
    assert_stages(&pipeline.run("abc"), &["bcd", "dcb"]);

    pipeline.move_up(reverse).unwrap();
    assert_stages(&pipeline.run("abc"), &["cba", "dcb"]);
}

#[test]
fn test_changing_kind_requires_remove_and_add() {
    let mut pipeline = Pipeline::new();
    let id = pipeline.steps()[0].id;

    assert_eq!(
        pipeline.update(id, Operation::Rot13),
        Err(PipelineError::KindMismatch {
            id,
            expected: OperationKind::Caesar,
            found: OperationKind::Rot13,
        })
    );

    let rot13 = pipeline.push(OperationKind::Rot13);
    pipeline.remove(id).unwrap();
    assert_eq!(pipeline.len(), 1);
    assert_eq!(pipeline.steps()[0].id, rot13);
    assert_eq!(pipeline.run("abc").final_output, "nop");
}

#[test]
fn test_pipeline_never_empty() {
    let mut pipeline = Pipeline::new();
    for _ in 0..5 {
        let id = pipeline.steps()[0].id;
        pipeline.remove(id).unwrap();
        assert_eq!(pipeline.len(), 1);
    }
    let ids: Vec<u64> = pipeline.steps().iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![6]);
}

#[test]
fn test_create_default_step_uses_caller_id() {
    let step = create_default_step(StepId(42), OperationKind::RailFence);
    assert_eq!(step.id, StepId(42));
    assert_eq!(step.kind(), OperationKind::RailFence);
    assert_eq!(step.apply("abcdef"), "aebdfc");
}

#[test]
fn test_snapshot_is_unaffected_by_later_edits() {
    let mut pipeline = Pipeline::new();
    let snapshot = pipeline.snapshot();
    pipeline.push(OperationKind::Reverse);

    let engine = ExecutionEngine::new();
    assert_eq!(engine.execute("abc", &snapshot).final_output, "def");
    assert_eq!(engine.execute("abc", pipeline.steps()).final_output, "fed");
}

#[test]
fn test_engine_reports_each_stage() {
    let labels = Arc::new(Mutex::new(Vec::new()));
    let sink = labels.clone();

    let mut engine = ExecutionEngine::new();
    engine.add_event_handler(move |event| {
        if let cipherchain::ExecutionEvent::StageCompleted { label, .. } = event {
            sink.lock().unwrap().push(label.clone());
        }
    });

    let mut pipeline = Pipeline::new();
    pipeline.push(OperationKind::A1z26);
    engine.execute("xyz", pipeline.steps());

    assert_eq!(
        *labels.lock().unwrap(),
        vec!["caesar (encode, shift 3)".to_string(), "a1z26 (encode)".to_string()]
    );
}
