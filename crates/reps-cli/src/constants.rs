//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (session, template, workout).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Sessions shown by `reps sessions list` when no limit is given.
pub const DEFAULT_SESSION_LIMIT: usize = reps_core::records::DEFAULT_RECENT_SESSIONS;

/// Workouts shown by `reps workouts list` when no limit is given.
pub const DEFAULT_WORKOUT_LIMIT: usize = reps_core::records::DEFAULT_RECENT_WORKOUTS;
