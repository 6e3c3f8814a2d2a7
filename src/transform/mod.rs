//! Operation library
//!
//! One pure evaluator per operation family. Every function is total: it is
//! defined for any input string, including the empty string, and never fails.

pub mod a1z26;
pub mod caesar;
pub mod letters;
pub mod rail_fence;
pub mod text;
pub mod vigenere;

pub use a1z26::a1z26;
pub use caesar::{caesar, rot13};
pub use rail_fence::rail_fence;
pub use text::{case_transform, replace, reverse, CaseMode};
pub use vigenere::vigenere;

use serde::{Deserialize, Serialize};

/// Direction of a reversible operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Encode
    }
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        }
    }
}
