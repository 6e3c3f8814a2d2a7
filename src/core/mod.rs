//! Core domain models for Pipeline
//!
//! This module defines the step and pipeline data structures, parameter
//! validation and the YAML configuration they are loaded from.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod step;
pub mod validate;

pub use error::PipelineError;
pub use pipeline::*;
pub use step::*;
