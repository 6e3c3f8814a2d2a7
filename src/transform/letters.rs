//! Letter algebra - single-character shift and case primitives
//!
//! Shared by Caesar, ROT13 and Vigenère. Only ASCII letters are ever shifted;
//! digits, punctuation, whitespace and non-Latin scripts pass through unchanged.

/// Number of letters in the Latin alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Shift a single letter forward by `shift` positions, wrapping at `z`
///
/// `shift` is expected in `[0, 25]`; larger values are reduced modulo 26.
/// With `preserve_case` the original case of `c` is kept, otherwise the
/// result is always lowercase.
pub fn shift_letter(c: char, shift: u8, preserve_case: bool) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }

    let lower = c.to_ascii_lowercase() as u8;
    let offset = (lower - b'a' + shift % ALPHABET_LEN) % ALPHABET_LEN;
    let shifted = (b'a' + offset) as char;

    if preserve_case && c.is_ascii_uppercase() {
        shifted.to_ascii_uppercase()
    } else {
        shifted
    }
}

/// Reduce an arbitrary non-negative shift into `[0, 25]`
pub fn normalize_shift(shift: u32) -> u8 {
    (shift % ALPHABET_LEN as u32) as u8
}

/// The shift that undoes `shift` (already normalized)
pub fn inverse_shift(shift: u8) -> u8 {
    (ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN
}

/// 1-based alphabet position of an ASCII letter, case-insensitive
pub fn alphabet_position(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_lowercase() as u8 - b'a' + 1)
    } else {
        None
    }
}

/// Lowercase ASCII letter for a 1-based alphabet position
pub fn letter_at(position: u8) -> Option<char> {
    if (1..=ALPHABET_LEN).contains(&position) {
        Some((b'a' + position - 1) as char)
    } else {
        None
    }
}
