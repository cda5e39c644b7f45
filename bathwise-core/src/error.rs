//! Engine error types with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the core.
///
/// The decision pipeline itself only ever fails with [`EngineError::EmptyInput`];
/// the remaining variants come from profile validation and the stores that
/// callers drive around the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Conflict resolution was called without any matched persona
    #[error("Conflict resolution requires at least one persona (got an empty match set)")]
    EmptyInput,

    /// The profile violates a data-model constraint
    #[error("Invalid profile: {reason}")]
    InvalidProfile { reason: String },

    /// No history entry carries the requested id
    #[error("No recommendation with id '{id}' in history")]
    UnknownRecommendation { id: String },

    /// The (intent, sub-protocol) pair is not in the catalog
    #[error("Unknown sub-protocol '{sub_protocol_id}' for intent '{intent_id}'")]
    UnknownSubProtocol {
        intent_id: String,
        sub_protocol_id: String,
    },

    /// Failed to read the history file
    #[error("Failed to read recommendation history from {path}")]
    HistoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the history file
    #[error("Failed to write recommendation history to {path}")]
    HistoryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The history could not be encoded, or the file on disk is not valid JSON
    #[error("Failed to encode or decode recommendation history (corrupted or invalid format)")]
    HistoryParse {
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read the settings file
    #[error("Failed to read settings from {path}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings or profile file is not valid YAML
    #[error("Failed to parse {path}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
