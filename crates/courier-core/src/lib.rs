//! `courier-core` — configuration, error taxonomy, and the shared
//! messaging-session contract used by the scheduler and the Telegram adapter.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CourierConfig, ErrorPolicy};
pub use error::{CourierError, Result};
