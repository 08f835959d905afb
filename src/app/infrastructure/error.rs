use std::path::PathBuf;

use thiserror::Error;

use crate::app::domain::SectionError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Resource error on {}: {source}", path.display())]
    ResourceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed section in {}: {source}", path.display())]
    MalformedSection {
        path: PathBuf,
        #[source]
        source: SectionError,
    },

    #[error("UI container not found: {0}")]
    ContainerMissing(String),

    #[error("Platform control error: {call}: {code}")]
    PlatformControl { call: &'static str, code: u32 },

    #[error("Enumeration error: {0}")]
    Enumeration(String),

    #[error("Invalid style rule: {0}")]
    InvalidRule(String),
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
    fn test_error_display() {
        let err = AppError::Storage("backend unavailable".to_string());
        assert_eq!(err.to_string(), "Storage error: backend unavailable");

        let err = AppError::ContainerMissing("fontsetter-selector-menu".to_string());
        assert_eq!(err.to_string(), "UI container not found: fontsetter-selector-menu");

        let err = AppError::PlatformControl {
            call: "SETFONTSMOOTHINGTYPE",
            code: 5,
        };
        assert_eq!(err.to_string(), "Platform control error: SETFONTSMOOTHINGTYPE: 5");
    }

    #[test]
    fn test_resource_error_mentions_path() {
        let err = AppError::ResourceIo {
            path: PathBuf::from("chrome/userChrome.css"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("userChrome.css"));
        assert!(text.contains("denied"));
    }
}
