use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourierError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credentials invalid or expired at startup. Fatal; nothing to retry.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Transport-level failure talking to the platform.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The platform refused a delivery, or the file cannot be read.
    #[error("Transmission failed: {0}")]
    Transmission(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CourierError>;
