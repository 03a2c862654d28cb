use thiserror::Error;

/// Errors that can occur while loading or serving recipe content
#[derive(Error, Debug)]
pub enum SiteError {
    /// Failed to read from the content directory
    #[error("Content store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
