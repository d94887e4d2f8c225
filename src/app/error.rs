use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error opening file: {0}")]
    FileRead(std::io::Error),

    #[error("Error saving file: {0}")]
    FileWrite(std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_file_error_display() {
        let read = AppError::FileRead(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        assert!(read.to_string().starts_with("Error opening file:"));

        let write = AppError::FileWrite(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        ));
        assert!(write.to_string().starts_with("Error saving file:"));
    }

    #[test]
    fn test_settings_error_display() {
        let err = AppError::Settings("unreadable record".to_string());
        assert_eq!(err.to_string(), "Settings error: unreadable record");
    }
}
