//! Error types for filedrop.

use thiserror::Error;

/// Common error type for filedrop.
#[derive(Error, Debug)]
pub enum FiledropError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// The upload directory cannot be read at all.
    ///
    /// Distinct from [`FiledropError::NotFound`]: this means the storage
    /// backing the whole listing is unavailable, not that a single file
    /// is missing.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Failure raised by the external resumable-upload engine.
    #[error("upload engine error: {0}")]
    Engine(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for filedrop operations.
pub type Result<T> = std::result::Result<T, FiledropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = FiledropError::NotFound("File: video.mp4".to_string());
        assert_eq!(err.to_string(), "File: video.mp4 not found");
    }

    #[test]
    fn test_storage_unavailable_display() {
        let err = FiledropError::StorageUnavailable("cannot read data/uploads".to_string());
        assert_eq!(
            err.to_string(),
            "storage unavailable: cannot read data/uploads"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FiledropError = io_err.into();
        assert!(matches!(err, FiledropError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(7)
        }

        assert_eq!(sample_ok().unwrap(), 7);
    }
}
