mod app_context;
mod channel;
mod check;
mod config;
mod dispatch;
mod history;
mod jobs;
mod transition;

use tracing_subscriber::EnvFilter;

use crate::app_context::AppContext;
use crate::channel::Channel;
use crate::config::{Config, load_config};
use crate::jobs::{mark_existing_processed, start_background_jobs};

fn init_json_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

const CONFIG_PATH: &str = "config.toml";

fn log_channel_summary(app_context: &AppContext) {
    if app_context.config.enabled_channel_count() == 0 {
        log::warn!("no notification channel enabled; nothing will be sent");
    }

    for channel in app_context.channels.iter() {
        log::info!("channel_enabled kind={}", channel.kind());
    }
}

#[tokio::main]
async fn main() {
    init_json_logging();

    let config: Config = match load_config(CONFIG_PATH) {
        Ok(config) => config,
        Err(error) => {
            log::error!("Configuration error: {}", error);
            return;
        }
    };

    let app_context = match AppContext::new(config) {
        Ok(app_context) => app_context,
        Err(error) => {
            log::error!("Channel setup failed: {}", error);
            return;
        }
    };

    log::info!(
        "Downtime notifier is starting... history_dir={}",
        app_context.history.dir().display()
    );
    log_channel_summary(&app_context);

    if app_context.config.dispatch.skip_existing_on_start {
        match mark_existing_processed(&app_context).await {
            Ok(Some(record)) => log::info!("startup_skip_existing record={}", record),
            Ok(None) => {}
            Err(error) => log::warn!("startup history read failed: {}", error),
        }
    }

    start_background_jobs(app_context);

    if let Err(error) = tokio::signal::ctrl_c().await {
        log::error!("shutdown signal listener failed: {}", error);
    }
    log::info!("Shutdown signal received. Stopping downtime notifier...");
}
