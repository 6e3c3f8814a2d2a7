//! A1Z26 - letters as their alphabet positions

use crate::transform::letters::{alphabet_position, letter_at};
use crate::transform::Mode;

pub fn a1z26(text: &str, mode: Mode) -> String {
    match mode {
        Mode::Encode => encode(text),
        Mode::Decode => decode(text),
    }
}

/// Replace each ASCII letter with its 1-based position
///
/// Every character becomes one token and tokens are joined by single spaces;
/// whitespace runs then collapse to one space and the ends are trimmed.
pub fn encode(text: &str) -> String {
    let mut joined = String::with_capacity(text.len() * 3);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        match alphabet_position(c) {
            Some(position) => joined.push_str(&position.to_string()),
            None => joined.push(c),
        }
    }
    collapse_whitespace(&joined)
}

/// Replace every standalone number 1..=26 with its lowercase letter
///
/// A number is standalone when it is a maximal run of ASCII digits with no
/// word character (ASCII alphanumeric or `_`) directly on either side. Runs
/// with a leading zero or outside 1..=26 are left as they are.
pub fn decode(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0usize;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let token = &chars[start..i];

        let bounded_left = start == 0 || !is_word_char(chars[start - 1]);
        let bounded_right = i == chars.len() || !is_word_char(chars[i]);

        match decode_token(token) {
            Some(letter) if bounded_left && bounded_right => out.push(letter),
            _ => out.extend(token),
        }
    }

    out
}

fn decode_token(token: &[char]) -> Option<char> {
    if token.is_empty() || token.len() > 2 || token[0] == '0' {
        return None;
    }
    let value = token
        .iter()
        .fold(0u8, |acc, d| acc * 10 + (*d as u8 - b'0'));
    letter_at(value)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out.trim_matches(' ').to_string()
}
