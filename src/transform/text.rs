//! Plain text edits: reverse, literal replace and case transforms

use serde::{Deserialize, Serialize};

/// Case transformation applied by [`case_transform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    Upper,
    Lower,
    /// Capitalize the first letter of each alphabetic run
    Title,
    /// Swap the case of every cased character
    Toggle,
}

impl Default for CaseMode {
    fn default() -> Self {
        CaseMode::Upper
    }
}

impl CaseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
            CaseMode::Title => "title",
            CaseMode::Toggle => "toggle",
        }
    }
}

/// Reverse the code points of `text`
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Replace every occurrence of `from` with `to`, treating `from` literally
///
/// Matches are found left to right and never overlap. Without `match_case`
/// characters are compared by their Unicode lowercase mapping. An empty
/// `from`, or a `to` identical to `from`, leaves the text unchanged; matched
/// text keeps its own casing in that case.
pub fn replace(text: &str, from: &str, to: &str, match_case: bool) -> String {
    if from.is_empty() || from == to {
        return text.to_string();
    }
    if match_case {
        return text.replace(from, to);
    }

    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = from.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0usize;

    while i < haystack.len() {
        let matched = i + needle.len() <= haystack.len()
            && haystack[i..i + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(a, b)| chars_eq_ignore_case(*a, *b));

        if matched {
            out.push_str(to);
            i += needle.len();
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }

    out
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Apply a case transformation
pub fn case_transform(text: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => text.to_uppercase(),
        CaseMode::Lower => text.to_lowercase(),
        CaseMode::Title => title_case(text),
        CaseMode::Toggle => toggle_case(text),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Uppercase letters go lower, everything else goes through its uppercase
/// mapping (uncased characters map to themselves, titlecase `ǅ` becomes `Ǆ`)
fn toggle_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}
