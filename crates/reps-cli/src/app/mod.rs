//! Application-level utilities for the Reps CLI.
//!
//! This module provides:
//! - Path resolution for the config file and data directory
//! - The per-invocation context shared by command handlers

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{load_config, resolve_config_path, resolve_data_dir};
