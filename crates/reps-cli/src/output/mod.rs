//! Output formatting helpers for the CLI.
//!
//! JSON shapes shared by several commands live here; text rendering is
//! built from `crate::ui` primitives inside each command.

mod json;

// Re-export public API
pub use json::{print_json, workout_json, workouts_json};
