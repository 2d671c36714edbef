//! Error types for scm-branding

use thiserror::Error;

/// Errors loading branding configuration
#[derive(Error, Debug)]
pub enum BrandingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BrandingError::Config("main_size is empty".to_string());
        assert_eq!(err.to_string(), "Configuration error: main_size is empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BrandingError = io_err.into();
        assert!(matches!(err, BrandingError::Io(_)));
    }
}
