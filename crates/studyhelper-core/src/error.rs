//! Core error types for studyhelper-core.
//!
//! This module defines the error hierarchy using thiserror. Grade warnings
//! are ordinary values the caller renders; nothing here is fatal.

use std::path::PathBuf;
use thiserror::Error;

use crate::grades::scale::MarkScale;

/// Core error type for studyhelper-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Semester computation could not produce an average
    #[error(transparent)]
    Grade(#[from] GradeError),

    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Warnings produced by the grade engine.
///
/// Both abort the current computation only; the caller may fix the inputs
/// and retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    /// A selected module has a blank or non-numeric component.
    #[error("Fill all required fields using numbers between {min} and {max}.")]
    MissingRequiredInput { min: f64, max: f64 },

    /// Every module was optional and none was filled in.
    #[error("No modules selected.")]
    NoModulesSelected,
}

impl GradeError {
    pub fn missing_input() -> Self {
        GradeError::MissingRequiredInput {
            min: MarkScale::MIN,
            max: MarkScale::MAX,
        }
    }
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    Query(String),

    /// A stored snapshot could not be decoded
    #[error("Stored value under '{key}' is corrupt: {message}")]
    Corrupt { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Semester key outside s1..s6
    #[error("Unknown semester '{0}'")]
    UnknownSemester(String),

    /// Module key not in the semester catalog
    #[error("Unknown module '{module}' in semester {semester}")]
    UnknownModule { semester: String, module: String },

    /// Component not used by the module's assessment shape
    #[error("Module '{module}' has no '{component}' component")]
    UnknownComponent { module: String, component: String },

    /// Habit id not found
    #[error("Habit with ID {0} not found")]
    UnknownHabit(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Query(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
