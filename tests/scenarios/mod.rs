//! Scenario-based tests for cipherchain

mod known_vectors;
mod pipeline_editing;
mod round_trips;
