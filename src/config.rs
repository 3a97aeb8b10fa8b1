//! Relay config: source chat, destination list, credentials for both
//! adapters. Loaded once from env; validate() fails fast before any
//! connection is opened.

use anyhow::Result;
use std::env;

/// Immutable process-lifetime configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// SOURCE_CHAT_ID; compared as an exact string against inbound chat ids
    pub source_chat_id: String,
    /// WHATSAPP_GROUP_IDS, comma-separated; order preserved, duplicates kept
    pub destinations: Vec<String>,
    /// WHATSAPP_API_URL: gateway base URL
    pub gateway_url: String,
    /// WHATSAPP_INSTANCE: gateway instance name
    pub gateway_instance: String,
    /// WHATSAPP_API_KEY
    pub gateway_api_key: String,
    /// Seconds between connection-state polls
    pub state_poll_secs: u64,
    /// Liveness endpoint port (PORT, hosting platform convention)
    pub port: u16,
    /// Log file path
    pub log_file: String,
}

impl RelayConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if
    /// provided. Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let source_chat_id =
            env::var("SOURCE_CHAT_ID").map_err(|_| anyhow::anyhow!("SOURCE_CHAT_ID not set"))?;
        let destinations = parse_destinations(
            &env::var("WHATSAPP_GROUP_IDS")
                .map_err(|_| anyhow::anyhow!("WHATSAPP_GROUP_IDS not set"))?,
        );
        let gateway_url =
            env::var("WHATSAPP_API_URL").map_err(|_| anyhow::anyhow!("WHATSAPP_API_URL not set"))?;
        let gateway_instance = env::var("WHATSAPP_INSTANCE")
            .map_err(|_| anyhow::anyhow!("WHATSAPP_INSTANCE not set"))?;
        let gateway_api_key =
            env::var("WHATSAPP_API_KEY").map_err(|_| anyhow::anyhow!("WHATSAPP_API_KEY not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let state_poll_secs = env::var("STATE_POLL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(15);
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10000);
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/channel-relay.log".to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            source_chat_id,
            destinations,
            gateway_url,
            gateway_instance,
            gateway_api_key,
            state_poll_secs,
            port,
            log_file,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        if self.source_chat_id.trim().is_empty() {
            anyhow::bail!("SOURCE_CHAT_ID is empty");
        }
        if self.destinations.is_empty() {
            anyhow::bail!("WHATSAPP_GROUP_IDS resolved to an empty destination list");
        }
        if reqwest::Url::parse(&self.gateway_url).is_err() {
            anyhow::bail!("WHATSAPP_API_URL is not a valid URL: {}", self.gateway_url);
        }
        if let Some(ref url) = self.telegram_api_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url
                );
            }
        }
        Ok(())
    }
}

/// Splits a comma-separated destination list, trimming whitespace and
/// dropping empty segments. Duplicates are kept (they mean duplicate
/// delivery, by configuration).
fn parse_destinations(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
