//! Error types for the YRES widgets

use thiserror::Error;

/// Main error type for widget operations
#[derive(Error, Debug)]
pub enum WidgetError {
    /// General I/O error (feed file, config file, analytics log)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport failure while fetching the program feed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed server answered with a non-success status
    #[error("Feed request failed with status {0}")]
    HttpStatus(u16),

    /// Malformed JSON in a feed or config file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unusable configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using WidgetError
pub type WidgetResult<T> = Result<T, WidgetError>;
