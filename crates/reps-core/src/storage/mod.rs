//! Persistence layer: key/value backends, the versioned blob layout and the
//! fail-soft JSON adapter the record stores are built on.

pub mod adapter;
pub mod envelope;
pub mod file_store;
pub mod memory;
pub mod traits;
pub mod types;

pub use adapter::{Adapter, Collection, OrDefaultLogged};
pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
pub use types::{
    Exercise, ExerciseInstance, Feeling, MovementSession, MovementType, Template,
    WorkoutExercise, WorkoutInstance,
};

/// Fixed storage keys. Each is owned by exactly one component.
pub mod keys {
    pub const TEMPLATES: &str = "@reps_templates";
    pub const WORKOUTS: &str = "@reps_workouts";
    pub const MOVEMENT_SESSIONS: &str = "@reps_movement_sessions";
    pub const WEATHER_CACHE: &str = "@reps_weather_cache";

    /// Keys holding user records (everything but the weather cache).
    pub const RECORDS: [&str; 3] = [TEMPLATES, WORKOUTS, MOVEMENT_SESSIONS];
}
