use thiserror::Error;

/// Errors produced by the poller.
#[derive(Debug, Error)]
pub enum PollerError {
    /// A job was registered with a zero interval.
    #[error("Invalid interval for job '{name}': must be positive")]
    InvalidInterval { name: String },

    /// The loop was started with a zero poll interval.
    #[error("Invalid poll interval: must be positive")]
    InvalidPollInterval,

    /// A job action failed and the error policy is `Propagate`.
    #[error("Job '{name}' failed: {source}")]
    JobFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, PollerError>;
