//! Test: known input/output pairs for each operation and a chained pipeline

use crate::helpers::*;
use cipherchain::core::step::{CaesarParams, RailFenceParams, ReplaceParams, VigenereParams};
use cipherchain::core::validate::{Rails, Shift};
use cipherchain::core::{Operation, OperationKind, Pipeline};
use cipherchain::{CaseMode, Mode};

fn caesar(mode: Mode, shift: i64) -> Operation {
    Operation::Caesar(CaesarParams {
        mode,
        shift: Shift::clamped(shift),
        preserve_case: true,
    })
}

#[test]
fn test_caesar_hello_world() {
    assert_eq!(apply(caesar(Mode::Encode, 3), "Hello World"), "Khoor Zruog");
    assert_eq!(apply(caesar(Mode::Decode, 3), "Khoor Zruog"), "Hello World");
}

#[test]
fn test_rail_fence_classic() {
    let op = Operation::RailFence(RailFenceParams {
        mode: Mode::Encode,
        rails: Rails::clamped(3),
    });
    assert_eq!(
        apply(op, "WEAREDISCOVEREDFLEEATONCE"),
        "WECRLTEERDSOEEFEAOCAIVDEN"
    );
}

#[test]
fn test_a1z26_encode() {
    assert_eq!(
        apply(Operation::A1z26 { mode: Mode::Encode }, "abc xyz"),
        "1 2 3 24 25 26"
    );
}

#[test]
fn test_vigenere_attack_at_dawn() {
    let encode = Operation::Vigenere(VigenereParams::default());
    let decode = Operation::Vigenere(VigenereParams {
        mode: Mode::Decode,
        ..VigenereParams::default()
    });

    let cipher = apply(encode, "attack at dawn");
    assert_ne!(cipher, "attack at dawn");
    assert_eq!(apply(decode, &cipher), "attack at dawn");
}

#[test]
fn test_caesar_then_reverse() {
    let yaml = r#"
steps:
  - kind: caesar
    mode: encode
    shift: 3
  - kind: reverse
"#;

    let pipeline = pipeline_from_yaml(yaml);
    let result = pipeline.run("abc");
    assert_stages(&result, &["def", "fed"]);
}

#[test]
fn test_each_stage_sees_only_its_predecessor() {
    let mut pipeline = Pipeline::new();
    pipeline.push(OperationKind::Rot13);
    pipeline.push(OperationKind::CaseTransform);
    pipeline.push(OperationKind::Reverse);

    let result = pipeline.run("abc");
    // +3, then +13, then upper-case, then reversed
    assert_stages(&result, &["def", "qrs", "QRS", "SRQ"]);
}

#[test]
fn test_replace_literal_pattern() {
    let op = Operation::Replace(ReplaceParams {
        from: "[a-z]+".to_string(),
        to: "word".to_string(),
        match_case: true,
    });
    assert_eq!(apply(op, "abc [a-z]+ def"), "abc word def");
}

#[test]
fn test_case_modes() {
    let text = "hello WORLD, it's 2024";
    let cases = [
        (CaseMode::Upper, "HELLO WORLD, IT'S 2024"),
        (CaseMode::Lower, "hello world, it's 2024"),
        (CaseMode::Title, "Hello World, It'S 2024"),
        (CaseMode::Toggle, "HELLO world, IT'S 2024"),
    ];
    for (case_mode, expected) in cases {
        assert_eq!(
            apply(Operation::CaseTransform { case_mode }, text),
            expected,
            "case mode {:?}",
            case_mode
        );
    }
}

#[test]
fn test_non_latin_text_survives_letter_ciphers() {
    let text = "Привет, 世界 — 123";
    let mut pipeline = Pipeline::new();
    pipeline.push(OperationKind::Rot13);
    pipeline.push(OperationKind::Vigenere);
    pipeline.push(OperationKind::RailFence);
    let result = pipeline.run(text);

    // letter ciphers leave the text untouched; rail fence only permutes it
    assert_eq!(result.stages[0].output, text);
    assert_eq!(result.stages[1].output, text);
    assert_eq!(result.stages[2].output, text);

    let mut sorted_in: Vec<char> = text.chars().collect();
    let mut sorted_out: Vec<char> = result.final_output.chars().collect();
    sorted_in.sort_unstable();
    sorted_out.sort_unstable();
    assert_eq!(sorted_in, sorted_out);
}
