//! Core error types for growthmind-core.
//!
//! This module defines the error hierarchy using thiserror. Each component
//! has its own narrow error enum; [`CoreError`] wraps them for callers that
//! drive several components at once (the CLI, mostly).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for growthmind-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session store errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Journal operation errors
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    /// Export/import errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by journal mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    /// The requested challenge id is not in the catalog.
    #[error("No challenge with id {id}")]
    UnknownChallenge { id: u32 },
}

/// Errors raised while producing or reading an export document.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Malformed export document: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but describes an impossible profile
    #[error("Invalid export document: {0}")]
    Invalid(String),
}

/// Session store errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// Stored profile could not be decoded
    #[error("Stored profile is corrupt: {0}")]
    CorruptProfile(String),
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

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name was already set for this profile
    #[error("Profile already onboarded as '{name}'")]
    AlreadyOnboarded { name: String },

    /// Onboarding with a blank name
    #[error("Name must not be empty")]
    EmptyName,

    /// Profile is not onboarded yet
    #[error("No profile yet; run `profile init` first")]
    NotOnboarded,

    /// longest_streak must never trail current_streak
    #[error("longest_streak ({longest}) is below current_streak ({current})")]
    StreakInvariant { current: u32, longest: u32 },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
