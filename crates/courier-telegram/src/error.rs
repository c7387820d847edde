use std::path::PathBuf;

use teloxide::RequestError;

use courier_core::CourierError;

/// Errors produced by the Telegram session.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// Telegram rejected the credentials at connect time.
    #[error("Telegram rejected the credentials: {0}")]
    Auth(RequestError),

    /// Transport-level failure talking to Telegram.
    #[error("network failure talking to Telegram: {0}")]
    Connection(RequestError),

    /// The platform refused the upload, or the file cannot be read.
    #[error("could not transmit '{}': {reason}", path.display())]
    Transmission { path: PathBuf, reason: String },
}

impl From<TelegramError> for CourierError {
    fn from(e: TelegramError) -> Self {
        match e {
            TelegramError::Auth(inner) => CourierError::AuthFailed(inner.to_string()),
            TelegramError::Connection(inner) => CourierError::Connection(inner.to_string()),
            TelegramError::Transmission { .. } => CourierError::Transmission(e.to_string()),
        }
    }
}

/// True for transport-level failures that say nothing about the credentials
/// or the request itself.
pub(crate) fn is_transport(err: &RequestError) -> bool {
    matches!(err, RequestError::Network(_) | RequestError::Io(_))
}

/// Classify a `getMe` failure: transport problems are connection errors,
/// anything else means the platform rejected the credentials.
pub(crate) fn classify_connect(err: RequestError) -> TelegramError {
    if is_transport(&err) {
        TelegramError::Connection(err)
    } else {
        TelegramError::Auth(err)
    }
}

/// Classify a `sendDocument` failure against the file being transmitted.
pub(crate) fn classify_send(err: RequestError, path: &std::path::Path) -> TelegramError {
    if is_transport(&err) {
        TelegramError::Connection(err)
    } else {
        TelegramError::Transmission {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}
