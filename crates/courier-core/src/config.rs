use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;
pub const DEFAULT_INTERVAL_MINUTES: u64 = 1;

/// Top-level config (courier.toml + COURIER_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierConfig {
    pub telegram: TelegramConfig,
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Numeric client identifier issued by the platform.
    pub app_id: u64,
    /// Client secret paired with `app_id`.
    pub app_secret: String,
}

/// What to send, to whom, and how often.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Recipient chat id. Group chats are negative.
    pub destination_id: i64,
    /// Local file to transmit on every firing.
    pub file_path: PathBuf,
    pub caption: String,
    /// Shown to the recipient as the document's file name.
    pub title: String,
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Granularity of the due check. Jobs can fire up to this much late.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            on_error: ErrorPolicy::default(),
        }
    }
}

/// What the poll loop does when a job action returns an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Surface the failure out of the loop, terminating the process.
    #[default]
    Propagate,
    /// Log the failure at warn level and keep the schedule running.
    LogAndContinue,
}

fn default_interval_minutes() -> u64 {
    DEFAULT_INTERVAL_MINUTES
}
fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

impl CourierConfig {
    /// Load config from a TOML file with COURIER_* env var overrides
    /// (double underscore separates nesting: COURIER_DELIVERY__CAPTION).
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.courier/courier.toml
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: CourierConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("COURIER_").split("__"))
            .extract()
            .map_err(|e| crate::error::CourierError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Delivery cadence as a duration.
    pub fn delivery_interval(&self) -> Duration {
        Duration::from_secs(self.delivery.interval_minutes * 60)
    }

    /// Poll-loop sleep as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.scheduler.poll_interval_secs)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.courier/courier.toml", home)
}
