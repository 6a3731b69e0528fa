//! Core error types for weekendly-core.
//!
//! Every fallible operation returns a typed error; nothing inside the
//! engine surfaces messages to the user directly. The host application
//! decides how each variant is presented.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Day;
use crate::interval::ClockTimeParseError;

/// Core error type for weekendly-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Placement / scheduling errors
    #[error("Placement error: {0}")]
    Placement(#[from] PlacementError),

    /// Catalog validation and lookup errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot persistence errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while mutating the weekend plan.
///
/// All of these are recoverable: the plan is left exactly as it was
/// before the failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The candidate's time window collides with an activity already on
    /// the target day.
    #[error("time conflict on {day} with '{with_name}'")]
    Conflict {
        day: Day,
        with_id: String,
        with_name: String,
    },

    /// No day in the active weekend can take the activity.
    #[error("no available slot for '{name}'")]
    NoSlot { id: String, name: String },

    /// The activity id is already placed or bucketed.
    #[error("activity '{id}' is already part of the plan")]
    Duplicate { id: String },

    /// The activity id is nowhere in the plan.
    #[error("activity '{id}' is not in the plan")]
    UnknownActivity { id: String },

    /// The target day is not part of the active weekend.
    #[error("{day} is not part of the active weekend")]
    DayNotInWeekend { day: Day },
}

/// Errors raised while building or querying a catalog.
///
/// Malformed catalog entries are rejected at load time, never at use time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog activity with empty id")]
    EmptyActivityId,

    #[error("duplicate activity id '{0}' in catalog")]
    DuplicateActivityId(String),

    #[error("activity '{id}' has a zero duration")]
    ZeroDuration { id: String },

    #[error("invalid activity time: {0}")]
    InvalidTime(#[from] ClockTimeParseError),

    #[error("catalog defines no weekend options")]
    NoWeekendOptions,

    #[error("weekend option '{key}' has no days")]
    EmptyWeekendOption { key: String },

    #[error("weekend option '{key}' lists {day} twice")]
    DuplicateWeekendDay { key: String, day: Day },

    #[error("duplicate weekend option key '{0}'")]
    DuplicateWeekendOption(String),

    #[error("duplicate theme key '{0}'")]
    DuplicateTheme(String),

    #[error("unknown theme '{key}'")]
    UnknownTheme { key: String },

    #[error("unknown weekend option '{key}'")]
    UnknownWeekendOption { key: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Snapshot persistence errors.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    #[error("Failed to write snapshot to {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// The snapshot names a weekend option the catalog does not know.
    #[error("snapshot references unknown weekend option '{key}'")]
    UnknownWeekendOption { key: String },

    /// The snapshot lists the same activity id more than once.
    #[error("snapshot lists activity '{id}' more than once")]
    DuplicateActivity { id: String },

    /// The snapshot schedules a day outside its weekend option.
    #[error("snapshot schedules {day} outside its weekend option")]
    DayOutsideWeekend { day: Day },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
