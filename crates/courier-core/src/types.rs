//! Shared types — the session contract between the poll loop and the
//! platform adapter.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The authenticated identity, as reported by the platform at connect time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub username: Option<String>,
    pub first_name: String,
    pub is_bot: bool,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.username {
            Some(username) => write!(f, "{} (@{}, id {})", self.first_name, username, self.id),
            None => write!(f, "{} (id {})", self.first_name, self.id),
        }
    }
}

/// One file delivery: local path plus the caption and title shown to the
/// recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMessage {
    pub path: PathBuf,
    pub caption: String,
    /// Presented as the document's file name on the receiving side.
    pub title: String,
}

/// Handle of a message accepted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageId(pub i32);

/// A connected messaging session.
///
/// Implemented by the Telegram adapter. The delivery job is generic over
/// this trait so the scheduling path can be exercised against an in-memory
/// fake.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Fetch the currently authenticated identity.
    async fn identity(&self) -> Result<Profile>;

    /// Transmit a local file with caption and title to `destination`.
    async fn send_file(&self, destination: i64, message: &FileMessage) -> Result<MessageId>;
}
