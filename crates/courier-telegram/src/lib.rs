//! `courier-telegram` — Telegram adapter over teloxide.
//!
//! Wraps a teloxide `Bot` behind the [`courier_core::types::Messenger`]
//! contract: one `getMe` call at connect time to validate credentials and
//! capture the identity, then `sendDocument` per scheduled delivery.

pub mod error;
pub mod session;

pub use error::TelegramError;
pub use session::TelegramSession;
