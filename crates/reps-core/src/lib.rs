//! # Reps Core
//!
//! Core library for Reps - a seasonal movement journal.
//!
//! This crate provides the data model, local persistence and derived
//! statistics independent of any user interface.
//!
//! ## Architecture
//!
//! - **storage**: key/value backends and the fail-soft, versioned JSON adapter
//! - **records**: template, workout and movement session stores
//! - **weather**: current conditions with a one-hour cache
//! - **stats**: streaks, presence row, most-common aggregates, season summary
//! - **season** / **greeting**: seasonal calendar and greeting text

pub mod error;
pub mod fs;
pub mod greeting;
pub mod journal;
pub mod records;
pub mod season;
pub mod stats;
pub mod storage;
pub mod weather;

pub use error::{RepsError, Result};
pub use journal::Journal;
pub use season::{season_day, Season, SeasonDay};
pub use storage::KeyValueStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
