//! Error types for token loading and alias dereferencing.
//!
//! The everyday tree operations (get, set, enumerate, flatten) are fail-soft
//! and never return these. They surface only from loading trees from text or
//! files and from the explicit multi-hop [`resolve_token_value`](crate::resolve_token_value).

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when following an alias chain to its literal fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    /// The starting path holds no token.
    #[error("no token at '{path}'")]
    Missing { path: String },

    /// An alias points at a location that holds no token.
    #[error("token '{from}' aliases non-existent token '{to}'")]
    Unresolved { from: String, to: String },

    /// The chain revisits a token it already passed through.
    #[error("cycle detected in token aliases: {}", .path.join(" -> "))]
    Cycle { path: Vec<String> },
}

/// Error returned when a token tree cannot be loaded.
#[derive(Debug, Error)]
pub enum TokenLoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of `.json`, `.yaml`, `.yml`.
    #[error("unsupported token file '{}': expected .json, .yaml or .yml", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// JSON syntax error.
    #[error("invalid JSON token tree: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML syntax error.
    #[error("invalid YAML token tree: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document root is not an object.
    #[error("token tree must be an object, found {0}")]
    NotAnObject(&'static str),
}
