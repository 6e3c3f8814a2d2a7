//! Pipeline configuration from YAML
//!
//! A pipeline file names its steps in order:
//!
//! ```yaml
//! name: "Layered"
//! input: "optional default input"
//! steps:
//!   - kind: caesar
//!     mode: decode
//!     shift: 3
//!   - kind: rail-fence
//!     rails: 4
//! ```
//!
//! Numeric parameters go through the validator (see [`crate::core::validate`]),
//! so out-of-range or non-numeric values are clamped instead of rejected.

use crate::core::{
    step::{
        CaesarParams, Operation, OperationKind, RailFenceParams, ReplaceParams, VigenereParams,
    },
    validate::{coerce_value, Rails, Shift},
    Pipeline,
};
use crate::transform::{CaseMode, Mode};
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Top-level pipeline configuration loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pipeline name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Default input text, used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Pipeline steps
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// Step configuration as written in YAML
///
/// Only the fields meaningful for `kind` are used; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
    pub kind: OperationKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    /// Caesar shift, number or numeric string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_case: Option<bool>,

    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_case: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_mode: Option<CaseMode>,

    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Rail count, number or numeric string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rails: Option<Value>,
}

/// Fields holding free text; inline specs keep these verbatim
const TEXT_FIELDS: [&str; 3] = ["from", "to", "key"];

/// Accept any YAML scalar as text so that `key: 123` means the string "123"
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected text, found {:?}",
            other
        ))),
    }
}

impl StepConfig {
    /// A config naming only the kind; every parameter takes its default
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            mode: None,
            shift: None,
            preserve_case: None,
            from: None,
            to: None,
            match_case: None,
            case_mode: None,
            key: None,
            rails: None,
        }
    }

    /// Parse an inline step spec: `kind[:key=value,...]`
    ///
    /// Example: `caesar:shift=5,mode=decode`. A value containing a comma
    /// escapes it as `\,` (and a literal backslash as `\\`).
    pub fn from_inline(spec: &str) -> Result<Self> {
        let (kind, params) = match spec.split_once(':') {
            Some((kind, params)) => (kind, params),
            None => (spec, ""),
        };

        let kind: OperationKind = kind.parse()?;
        let mut map = Mapping::new();
        map.insert(Value::from("kind"), Value::from(kind.as_str()));

        for pair in split_params(params).iter().filter(|p| !p.trim().is_empty()) {
            let (key, raw) = parse_key_value(pair)
                .with_context(|| format!("Invalid step spec '{}'", spec))?;
            let key = key.trim().replace('-', "_");
            let value = if TEXT_FIELDS.contains(&key.as_str()) {
                Value::String(raw)
            } else {
                inline_scalar(raw.trim())
            };
            map.insert(Value::String(key), value);
        }

        serde_yaml::from_value(Value::Mapping(map))
            .with_context(|| format!("Invalid step spec '{}'", spec))
    }

    /// Names of set fields that `kind` does not use
    pub fn irrelevant_fields(&self) -> Vec<&'static str> {
        let relevant: &[&str] = match self.kind {
            OperationKind::Caesar => &["mode", "shift", "preserve_case"],
            OperationKind::Reverse | OperationKind::Rot13 => &[],
            OperationKind::Replace => &["from", "to", "match_case"],
            OperationKind::CaseTransform => &["case_mode"],
            OperationKind::A1z26 => &["mode"],
            OperationKind::Vigenere => &["mode", "key", "preserve_case"],
            OperationKind::RailFence => &["mode", "rails"],
        };

        let set = [
            ("mode", self.mode.is_some()),
            ("shift", self.shift.is_some()),
            ("preserve_case", self.preserve_case.is_some()),
            ("from", self.from.is_some()),
            ("to", self.to.is_some()),
            ("match_case", self.match_case.is_some()),
            ("case_mode", self.case_mode.is_some()),
            ("key", self.key.is_some()),
            ("rails", self.rails.is_some()),
        ];

        set.iter()
            .filter(|(name, is_set)| *is_set && !relevant.contains(name))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Validate parameters and build the operation
    pub fn to_operation(&self) -> Operation {
        for field in self.irrelevant_fields() {
            warn!("Ignoring '{}' on {} step", field, self.kind);
        }

        let mode = self.mode.unwrap_or_default();
        let preserve_case = self.preserve_case.unwrap_or(true);

        match self.kind {
            OperationKind::Caesar => Operation::Caesar(CaesarParams {
                mode,
                shift: self
                    .shift
                    .as_ref()
                    .map_or_else(Shift::default, |v| Shift::clamped(coerce_value(v))),
                preserve_case,
            }),
            OperationKind::Reverse => Operation::Reverse,
            OperationKind::Replace => Operation::Replace(ReplaceParams {
                from: self.from.clone().unwrap_or_default(),
                to: self.to.clone().unwrap_or_default(),
                match_case: self.match_case.unwrap_or(true),
            }),
            OperationKind::CaseTransform => Operation::CaseTransform {
                case_mode: self.case_mode.unwrap_or_default(),
            },
            OperationKind::Rot13 => Operation::Rot13,
            OperationKind::A1z26 => Operation::A1z26 { mode },
            OperationKind::Vigenere => Operation::Vigenere(VigenereParams {
                mode,
                key: self.key.clone().unwrap_or_else(|| VigenereParams::default().key),
                preserve_case,
            }),
            OperationKind::RailFence => Operation::RailFence(RailFenceParams {
                mode,
                rails: self
                    .rails
                    .as_ref()
                    .map_or_else(Rails::default, |v| Rails::clamped(coerce_value(v))),
            }),
        }
    }

    /// The fully specified config for an operation
    pub fn from_operation(operation: &Operation) -> Self {
        let mut config = Self::new(operation.kind());
        match operation {
            Operation::Caesar(p) => {
                config.mode = Some(p.mode);
                config.shift = Some(Value::from(p.shift.value()));
                config.preserve_case = Some(p.preserve_case);
            }
            Operation::Reverse | Operation::Rot13 => {}
            Operation::Replace(p) => {
                config.from = Some(p.from.clone());
                config.to = Some(p.to.clone());
                config.match_case = Some(p.match_case);
            }
            Operation::CaseTransform { case_mode } => config.case_mode = Some(*case_mode),
            Operation::A1z26 { mode } => config.mode = Some(*mode),
            Operation::Vigenere(p) => {
                config.mode = Some(p.mode);
                config.key = Some(p.key.clone());
                config.preserve_case = Some(p.preserve_case);
            }
            Operation::RailFence(p) => {
                config.mode = Some(p.mode);
                config.rails = Some(Value::from(p.rails.value() as u64));
            }
        }
        config
    }
}

/// Split inline parameters on unescaped commas, unescaping `\,` and `\\`
fn split_params(params: &str) -> Vec<String> {
    let mut pairs = Vec::new();
    let mut current = String::new();
    let mut chars = params.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next @ (',' | '\\')) => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            ',' => pairs.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    pairs.push(current);
    pairs
}

fn inline_scalar(raw: &str) -> Value {
    match serde_yaml::from_str::<Value>(raw) {
        Ok(value @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}

/// Parse key=value pairs
pub fn parse_key_value(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.to_string(), value.to_string())),
        _ => anyhow::bail!("Invalid key=value pair: {}", s),
    }
}

impl PipelineConfig {
    /// Load pipeline configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pipeline file {}", path.display()))?;
        let config = Self::from_yaml(&content)?;
        info!(
            "Loaded pipeline {} from {}",
            config.name.as_deref().unwrap_or("(unnamed)"),
            path.display()
        );
        Ok(config)
    }

    /// Parse pipeline configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PipelineConfig =
            serde_yaml::from_str(yaml).context("Invalid pipeline configuration")?;
        Ok(config)
    }

    /// Build a config from inline step specs
    pub fn from_inline_steps<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        let steps = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                StepConfig::from_inline(spec.as_ref()).with_context(|| format!("Step {}", i + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: None,
            input: None,
            steps,
        })
    }

    /// Default pipeline file location: `<config dir>/cipherchain/pipeline.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cipherchain").join("pipeline.yaml"))
    }

    /// Convert config to a Pipeline domain model
    ///
    /// An empty step list yields the default single-step pipeline.
    pub fn to_pipeline(&self) -> Pipeline {
        if self.steps.is_empty() {
            warn!("Pipeline has no steps, using the default step");
        }
        Pipeline::from_operations(self.steps.iter().map(StepConfig::to_operation))
    }

    /// The same pipeline with every parameter validated and spelled out
    pub fn normalized(&self) -> Self {
        let pipeline = self.to_pipeline();
        Self {
            name: self.name.clone(),
            input: self.input.clone(),
            steps: pipeline
                .steps()
                .iter()
                .map(|s| StepConfig::from_operation(s.operation()))
                .collect(),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
