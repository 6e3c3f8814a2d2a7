//! Step domain model

use crate::core::error::PipelineError;
use crate::core::validate::{Rails, Shift};
use crate::transform::{self, CaseMode, Mode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a step, unique within a pipeline and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of operation kinds
///
/// Written kebab-case; YAML, inline specs and the command line all parse
/// through [`FromStr`], which also takes `_` for `-` and any letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum OperationKind {
    Caesar,
    Reverse,
    Replace,
    CaseTransform,
    Rot13,
    A1z26,
    Vigenere,
    RailFence,
}

impl OperationKind {
    pub const ALL: [OperationKind; 8] = [
        OperationKind::Caesar,
        OperationKind::Reverse,
        OperationKind::Replace,
        OperationKind::CaseTransform,
        OperationKind::Rot13,
        OperationKind::A1z26,
        OperationKind::Vigenere,
        OperationKind::RailFence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Caesar => "caesar",
            OperationKind::Reverse => "reverse",
            OperationKind::Replace => "replace",
            OperationKind::CaseTransform => "case-transform",
            OperationKind::Rot13 => "rot13",
            OperationKind::A1z26 => "a1z26",
            OperationKind::Vigenere => "vigenere",
            OperationKind::RailFence => "rail-fence",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        OperationKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| PipelineError::UnknownKind(s.to_string()))
    }
}

impl TryFrom<String> for OperationKind {
    type Error = PipelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaesarParams {
    pub mode: Mode,
    pub shift: Shift,
    pub preserve_case: bool,
}

impl Default for CaesarParams {
    fn default() -> Self {
        Self {
            mode: Mode::Encode,
            shift: Shift::default(),
            preserve_case: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceParams {
    pub from: String,
    pub to: String,
    pub match_case: bool,
}

impl Default for ReplaceParams {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            match_case: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VigenereParams {
    pub mode: Mode,
    pub key: String,
    pub preserve_case: bool,
}

impl Default for VigenereParams {
    fn default() -> Self {
        Self {
            mode: Mode::Encode,
            key: "KEY".to_string(),
            preserve_case: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RailFenceParams {
    pub mode: Mode,
    pub rails: Rails,
}

impl Default for RailFenceParams {
    fn default() -> Self {
        Self {
            mode: Mode::Encode,
            rails: Rails::default(),
        }
    }
}

/// An operation together with the parameters it needs
///
/// Parameters are validated on construction (see [`Shift`] and [`Rails`]), so
/// evaluation never sees out-of-range values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Operation {
    Caesar(CaesarParams),
    Reverse,
    Replace(ReplaceParams),
    CaseTransform { case_mode: CaseMode },
    Rot13,
    A1z26 { mode: Mode },
    Vigenere(VigenereParams),
    RailFence(RailFenceParams),
}

impl Operation {
    /// The operation of `kind` with its default parameters
    pub fn default_for(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Caesar => Operation::Caesar(CaesarParams::default()),
            OperationKind::Reverse => Operation::Reverse,
            OperationKind::Replace => Operation::Replace(ReplaceParams::default()),
            OperationKind::CaseTransform => Operation::CaseTransform {
                case_mode: CaseMode::default(),
            },
            OperationKind::Rot13 => Operation::Rot13,
            OperationKind::A1z26 => Operation::A1z26 { mode: Mode::default() },
            OperationKind::Vigenere => Operation::Vigenere(VigenereParams::default()),
            OperationKind::RailFence => Operation::RailFence(RailFenceParams::default()),
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Caesar(_) => OperationKind::Caesar,
            Operation::Reverse => OperationKind::Reverse,
            Operation::Replace(_) => OperationKind::Replace,
            Operation::CaseTransform { .. } => OperationKind::CaseTransform,
            Operation::Rot13 => OperationKind::Rot13,
            Operation::A1z26 { .. } => OperationKind::A1z26,
            Operation::Vigenere(_) => OperationKind::Vigenere,
            Operation::RailFence(_) => OperationKind::RailFence,
        }
    }

    /// Evaluate the operation over `text`
    pub fn apply(&self, text: &str) -> String {
        match self {
            Operation::Caesar(p) => {
                transform::caesar(text, p.mode, p.shift.value(), p.preserve_case)
            }
            Operation::Reverse => transform::reverse(text),
            Operation::Replace(p) => transform::replace(text, &p.from, &p.to, p.match_case),
            Operation::CaseTransform { case_mode } => transform::case_transform(text, *case_mode),
            Operation::Rot13 => transform::rot13(text),
            Operation::A1z26 { mode } => transform::a1z26(text, *mode),
            Operation::Vigenere(p) => {
                transform::vigenere(text, p.mode, &p.key, p.preserve_case)
            }
            Operation::RailFence(p) => transform::rail_fence(text, p.mode, p.rails.value()),
        }
    }

    /// Short human-readable label, e.g. `caesar (encode, shift 3)`
    pub fn describe(&self) -> String {
        let kind = self.kind();
        match self {
            Operation::Caesar(p) => format!("{} ({}, shift {})", kind, p.mode.as_str(), p.shift),
            Operation::Reverse | Operation::Rot13 => kind.to_string(),
            Operation::Replace(p) => format!("{} ({:?} -> {:?})", kind, p.from, p.to),
            Operation::CaseTransform { case_mode } => format!("{} ({})", kind, case_mode.as_str()),
            Operation::A1z26 { mode } => format!("{} ({})", kind, mode.as_str()),
            Operation::Vigenere(p) => format!("{} ({}, key {:?})", kind, p.mode.as_str(), p.key),
            Operation::RailFence(p) => {
                format!("{} ({}, {} rails)", kind, p.mode.as_str(), p.rails)
            }
        }
    }
}

/// A single stage of a pipeline
///
/// The kind of a step is fixed at creation; only its parameters can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Unique step identifier
    pub id: StepId,

    #[serde(flatten)]
    operation: Operation,
}

impl Step {
    pub fn new(id: StepId, operation: Operation) -> Self {
        Self { id, operation }
    }

    /// A step of `kind` with the documented default parameters
    pub fn with_defaults(id: StepId, kind: OperationKind) -> Self {
        Self::new(id, Operation::default_for(kind))
    }

    pub fn kind(&self) -> OperationKind {
        self.operation.kind()
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Replace the step's parameters, keeping its kind
    pub fn set_operation(&mut self, operation: Operation) -> Result<(), PipelineError> {
        if operation.kind() != self.kind() {
            return Err(PipelineError::KindMismatch {
                id: self.id,
                expected: self.kind(),
                found: operation.kind(),
            });
        }
        self.operation = operation;
        Ok(())
    }

    pub fn apply(&self, text: &str) -> String {
        self.operation.apply(text)
    }

    pub fn describe(&self) -> String {
        self.operation.describe()
    }
}

/// Create a step of `kind` with default parameters and the caller's id
pub fn create_default_step(id: StepId, kind: OperationKind) -> Step {
    Step::with_defaults(id, kind)
}
