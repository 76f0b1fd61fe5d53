/// Structured error types for studio-core.
///
/// The query operations (search, filters, dispatch) never fail. Errors only
/// come from the edges: loading fixtures and config, and parsing names.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for studio-core operations
#[derive(Error, Debug)]
pub enum StudioError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// TOML config parsing failed
    #[error("Invalid TOML in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Two entities in one collection share an id
    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId { collection: String, id: String },

    /// Status string outside the closed set for its entity
    #[error("Unknown {kind} status '{value}'")]
    UnknownStatus { kind: String, value: String },

    /// View name that is not part of the navigation
    #[error("Unknown view '{value}'")]
    UnknownView { value: String },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for studio-core operations
pub type Result<T> = std::result::Result<T, StudioError>;

impl StudioError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a TOML error for the given file
    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }

    pub fn duplicate_id(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            collection: collection.into(),
            id: id.into(),
        }
    }

    pub fn unknown_status(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownStatus {
            kind: kind.into(),
            value: value.into(),
        }
    }

    pub fn unknown_view(value: impl Into<String>) -> Self {
        Self::UnknownView {
            value: value.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
