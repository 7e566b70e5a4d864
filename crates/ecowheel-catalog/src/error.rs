//! Error types for catalog loading

use std::path::PathBuf;

/// Errors while loading the catalog document
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = CatalogError::io_error(
            "catalog.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "io error reading catalog.txt: missing");
    }
}
