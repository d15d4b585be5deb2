//! Error types for code generation.
//!
//! [`CodegenError`] abstracts over the template engine's errors so the
//! engine stays an implementation detail. The fail-soft dispatcher
//! ([`generate_code`](crate::generate_code)) never returns it; the typed
//! entry points and [`export_files`](crate::export_files) do.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for generation and export.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Unknown strategy name.
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    /// Unknown component id.
    #[error("unknown component '{0}'")]
    UnknownComponent(String),

    /// A skeleton template is missing from the engine.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Template syntax error or failure while rendering.
    #[error("template error: {0}")]
    Template(String),

    /// The generation context could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Writing generated files failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<minijinja::Error> for CodegenError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => CodegenError::TemplateNotFound(err.to_string()),
            ErrorKind::BadSerialization => CodegenError::Serialization(err.to_string()),
            _ => CodegenError::Template(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::Serialization(err.to_string())
    }
}

/// Result alias for generation.
pub type Result<T> = std::result::Result<T, CodegenError>;
