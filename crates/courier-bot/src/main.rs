use std::sync::Arc;

use tracing::info;

use courier_core::config::CourierConfig;
use courier_core::types::FileMessage;
use courier_scheduler::Poller;
use courier_telegram::TelegramSession;

mod delivery;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courier=info".into()),
        )
        .init();

    // load config: explicit path via COURIER_CONFIG > ~/.courier/courier.toml
    let config_path = std::env::var("COURIER_CONFIG").ok();
    let config = CourierConfig::load(config_path.as_deref())?;

    let session = Arc::new(TelegramSession::connect(&config.telegram).await?);
    info!(identity = %session.cached_profile(), "session established");

    let message = FileMessage {
        path: config.delivery.file_path.clone(),
        caption: config.delivery.caption.clone(),
        title: config.delivery.title.clone(),
    };

    let mut poller = Poller::new(config.scheduler.on_error);
    poller.register(
        "send-file",
        config.delivery_interval(),
        delivery::delivery_job(
            Arc::clone(&session),
            config.delivery.destination_id,
            message,
        ),
    )?;

    // Runs until externally terminated. Under the default policy a job
    // failure propagates here and the process exits non-zero.
    poller.run_forever(config.poll_interval()).await?;
    Ok(())
}
