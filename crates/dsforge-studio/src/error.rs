//! Error types for studio state changes and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned by a [`Storage`](crate::Storage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the store failed.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored snapshot is not valid JSON for the current schema.
    #[error("invalid studio snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned by [`Studio`](crate::Studio) operations.
#[derive(Debug, Error)]
pub enum StudioError {
    #[error("no brand with id '{0}'")]
    UnknownBrand(String),

    #[error("no theme with id '{0}' in the active brand")]
    UnknownTheme(String),

    /// Deleting would leave the studio without brands.
    #[error("cannot delete the only brand")]
    LastBrand,

    /// Deleting would leave the brand without themes.
    #[error("cannot delete the last theme of brand '{brand}'")]
    LastTheme { brand: String },

    #[error("unknown theme mode '{0}': expected light or dark")]
    UnknownMode(String),

    /// A loaded snapshot breaks a structural invariant.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(StudioError::LastBrand.to_string(), "cannot delete the only brand");
        assert_eq!(
            StudioError::LastTheme { brand: "Acme".into() }.to_string(),
            "cannot delete the last theme of brand 'Acme'"
        );
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StudioError::from(StorageError::from(json));
        assert!(err.to_string().starts_with("invalid studio snapshot:"));
    }
}
