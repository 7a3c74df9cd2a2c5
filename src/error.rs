//! Error types for the construct tree and project configuration.
//!
//! Interface registration and membership testing never fail, so there is no
//! interface error type here; only building the tree and loading options can.

use thiserror::Error;

/// Errors raised while attaching nodes, components or projects to a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    /// A non-root node was given an empty id.
    #[error("Only root constructs may have an empty id (scope: {scope})")]
    EmptyId { scope: String },

    /// A sibling with the same id already exists.
    #[error("There is already a construct with id '{id}' in {scope}")]
    DuplicateId { id: String, scope: String },

    /// Context may only be set before the node has children.
    #[error("Cannot set context after children have been added: {path}")]
    ContextAfterChildren { path: String },

    /// A component was created outside of any project.
    #[error("{path} cannot find a parent project (directly or indirectly)")]
    NotInProject { path: String },
}

/// Errors raised while loading [`ProjectOptions`](crate::project::ProjectOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension does not map to a known format.
    #[error("Unsupported options format: {0}")]
    UnsupportedFormat(String),

    /// Options parsed but are not usable.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result alias for tree construction.
pub type Result<T, E = ConstructError> = std::result::Result<T, E>;
