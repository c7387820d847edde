//! The scheduled delivery job: one file, one fixed recipient, every interval.

use std::sync::Arc;

use tracing::info;

use courier_core::types::{FileMessage, Messenger};
use courier_scheduler::Action;

/// Build the recurring action that transmits `message` to `destination`.
///
/// The session is shared with the process root and outlives every
/// invocation; each firing performs exactly one send and completes before
/// the poll loop moves on.
pub fn delivery_job<S: Messenger + 'static>(
    session: Arc<S>,
    destination: i64,
    message: FileMessage,
) -> Action {
    Box::new(move || {
        let session = Arc::clone(&session);
        let message = message.clone();
        Box::pin(async move {
            let sent = session.send_file(destination, &message).await?;
            info!(message_id = sent.0, chat = destination, "scheduled delivery sent");
            Ok(())
        })
    })
}
