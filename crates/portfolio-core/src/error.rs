//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for portfolio core operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Project category id outside the fixed filter set
    #[error("Unknown project category: {0}")]
    UnknownCategory(String),

    /// Page section id that does not exist
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Configuration rejected by validation
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::UnknownCategory("games".to_string());
        assert_eq!(format!("{}", err), "Unknown project category: games");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
