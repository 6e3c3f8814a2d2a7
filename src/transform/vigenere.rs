//! Vigenère cipher

use crate::transform::letters::{inverse_shift, shift_letter};
use crate::transform::Mode;

/// Derive the key stream offsets from a key
///
/// The key is lowercased and stripped of everything but ASCII letters; each
/// remaining letter becomes its offset from `a`.
pub fn key_stream(key: &str) -> Vec<u8> {
    key.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase() as u8 - b'a')
        .collect()
}

/// Apply the Vigenère cipher with `key`
///
/// The key position advances only on ASCII letters. A key without letters
/// leaves the text unchanged.
pub fn vigenere(text: &str, mode: Mode, key: &str, preserve_case: bool) -> String {
    let offsets = key_stream(key);
    if offsets.is_empty() {
        return text.to_string();
    }

    let mut position = 0usize;
    text.chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let offset = offsets[position % offsets.len()];
            position += 1;
            let shift = match mode {
                Mode::Encode => offset,
                Mode::Decode => inverse_shift(offset),
            };
            shift_letter(c, shift, preserve_case)
        })
        .collect()
}
