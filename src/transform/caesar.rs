//! Caesar shift and ROT13

use crate::transform::letters::{inverse_shift, normalize_shift, shift_letter};
use crate::transform::Mode;

/// Fixed shift used by ROT13
pub const ROT13_SHIFT: u32 = 13;

/// Apply a Caesar shift to every ASCII letter in `text`
///
/// `shift` is reduced modulo 26 first, so any non-negative value is accepted.
pub fn caesar(text: &str, mode: Mode, shift: u32, preserve_case: bool) -> String {
    let normalized = normalize_shift(shift);
    let effective = match mode {
        Mode::Encode => normalized,
        Mode::Decode => inverse_shift(normalized),
    };

    text.chars()
        .map(|c| shift_letter(c, effective, preserve_case))
        .collect()
}

/// ROT13 - Caesar with shift 13, case preserved; its own inverse
pub fn rot13(text: &str) -> String {
    caesar(text, Mode::Encode, ROT13_SHIFT, true)
}
