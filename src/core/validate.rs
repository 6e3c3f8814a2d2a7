//! Parameter validation
//!
//! Numeric parameters coming from users are coerced to numbers (anything
//! unparsable becomes `0`) and then clamped into the range declared for their
//! kind. Clamping saturates; the Caesar evaluator does its own modular
//! reduction later on the already-clamped value.

use serde::Serialize;
use serde_yaml::Value;
use std::fmt;
use tracing::warn;

/// Caesar shift, always within `[Shift::MIN, Shift::MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Shift(u8);

impl Shift {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    /// Clamp an arbitrary integer into the shift range
    pub fn clamped(value: i64) -> Self {
        Shift(clamp_logged("shift", value, Self::MIN, Self::MAX) as u8)
    }

    /// Parse user input, falling back to `0` for non-numeric text
    pub fn parse(input: &str) -> Self {
        Self::clamped(coerce_number(input))
    }

    pub fn value(&self) -> u32 {
        self.0 as u32
    }
}

impl Default for Shift {
    fn default() -> Self {
        Shift(3)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rail count, always within `[Rails::MIN, Rails::MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rails(u8);

impl Rails {
    pub const MIN: i64 = 2;
    pub const MAX: i64 = 10;

    pub fn clamped(value: i64) -> Self {
        Rails(clamp_logged("rails", value, Self::MIN, Self::MAX) as u8)
    }

    pub fn parse(input: &str) -> Self {
        Self::clamped(coerce_number(input))
    }

    pub fn value(&self) -> usize {
        self.0 as usize
    }
}

impl Default for Rails {
    fn default() -> Self {
        Rails(3)
    }
}

impl fmt::Display for Rails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interpret user text as an integer
///
/// Integers parse directly, decimals are truncated toward zero and anything
/// else (including NaN and infinities) becomes `0`.
pub fn coerce_number(input: &str) -> i64 {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return n;
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 0,
    }
}

/// Interpret a YAML scalar as an integer using the same rules as [`coerce_number`]
pub fn coerce_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if let Some(u) = n.as_u64() {
                i64::try_from(u).unwrap_or(i64::MAX)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
                    .unwrap_or(0)
            }
        }
        Value::String(s) => coerce_number(s),
        Value::Bool(_) | Value::Null | Value::Sequence(_) | Value::Mapping(_) => 0,
        Value::Tagged(tagged) => coerce_value(&tagged.value),
    }
}

fn clamp_logged(name: &str, value: i64, min: i64, max: i64) -> i64 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{} {} out of range, clamped to {}", name, value, clamped);
    }
    clamped
}
