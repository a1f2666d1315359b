pub mod init;
pub mod log;
pub mod maintenance;
pub mod misc;
pub mod sessions;
pub mod stats;
pub mod templates;
pub mod today;
pub mod workouts;
