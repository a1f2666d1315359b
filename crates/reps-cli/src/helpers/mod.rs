//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Confirmation prompts (`input`)
//! - Datetime and exercise-spec parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::confirm;
pub use parsing::{
    parse_datetime, parse_exercise_assignment, parse_exercise_spec, parse_exercise_specs, parse_feeling,
    parse_movement_type, ExerciseSpec,
};
