//! Error types for Restage
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use thiserror::Error;

/// Result type alias for Restage operations
pub type RestageResult<T> = Result<T, RestageError>;

/// Main error type for Restage operations
///
/// Missing legacy sources are never errors (they are silently skipped);
/// only real filesystem faults and serialization failures surface here.
#[derive(Error, Debug)]
pub enum RestageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = RestageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        assert!(err.to_string().starts_with("IO error:"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_io_error_from() {
        fn fails() -> RestageResult<()> {
            let res: Result<(), std::io::Error> =
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
            res?;
            Ok(())
        }
        assert!(matches!(fails(), Err(RestageError::Io(_))));
    }
}
