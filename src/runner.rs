//! Main entry: init logging, validate config, build both adapters, spawn the
//! liveness endpoint, state monitor, and heartbeat, then run the dispatcher.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{error, info, instrument};

use crate::config::RelayConfig;
use crate::core::{init_tracing, DestinationClient, SourceClient};
use crate::health;
use crate::pipeline::ForwardPipeline;
use crate::telegram::{run_dispatcher, TelegramSource};
use crate::whatsapp::WhatsAppGateway;

/// Runs the relay until the process is stopped. Fails fast (before any
/// connection is opened) on invalid config.
#[instrument(skip(config))]
pub async fn run_relay(config: RelayConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        source_chat_id = %config.source_chat_id,
        destinations = config.destinations.len(),
        gateway_instance = %config.gateway_instance,
        "starting relay"
    );

    let bot = build_bot(&config)?;
    let source: Arc<dyn SourceClient> = Arc::new(TelegramSource::new(
        bot.clone(),
        config.telegram_api_url.clone(),
    ));

    let (gateway, monitor) = WhatsAppGateway::connect(
        &config.gateway_url,
        &config.gateway_instance,
        &config.gateway_api_key,
        Duration::from_secs(config.state_poll_secs),
    );
    tokio::spawn(monitor.run());

    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = health::serve(port).await {
            error!(error = %e, "liveness endpoint failed");
        }
    });
    tokio::spawn(heartbeat());

    let destination: Arc<dyn DestinationClient> = gateway;
    let pipeline = Arc::new(ForwardPipeline::new(
        config.source_chat_id.clone(),
        config.destinations.clone(),
        source,
        destination,
    ));

    info!("relay started");
    run_dispatcher(bot, pipeline).await
}

fn build_bot(config: &RelayConfig) -> Result<teloxide::Bot> {
    let mut bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(ref url) = config.telegram_api_url {
        bot = bot.set_api_url(reqwest::Url::parse(url)?);
    }
    Ok(bot)
}

/// Keep-alive heartbeat line once a minute, so hosted logs show the process
/// is still up between forwarded messages.
async fn heartbeat() {
    let mut ticker = tokio::time::interval(Duration::from_secs(60));
    ticker.tick().await;
    loop {
        ticker.tick().await;
        info!("still alive");
    }
}
