//! Error types for fresco_app

use thiserror::Error;

/// Errors that can occur while setting up or running a sketch
#[derive(Error, Debug)]
pub enum AppError {
    /// Platform error (windowing, event loop, input)
    #[error("Platform error: {0}")]
    Platform(#[from] fresco_platform::PlatformError),

    /// Invalid sketch configuration
    #[error("Invalid sketch configuration: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for fresco_app operations
pub type Result<T> = std::result::Result<T, AppError>;
