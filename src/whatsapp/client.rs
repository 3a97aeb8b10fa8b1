//! WhatsApp gateway client: implements [`crate::core::DestinationClient`]
//! over an Evolution-style REST gateway. Media goes up base64-encoded; the
//! connection state is published by the companion monitor and only read here.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::core::{ConnectionState, DestinationClient, GroupInfo, RelayError, Result};

use super::monitor::ConnectionMonitor;

#[derive(Debug, Serialize)]
struct SendTextBody<'a> {
    number: &'a str,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SendMediaBody<'a> {
    number: &'a str,
    mediatype: &'a str,
    mimetype: &'a str,
    caption: &'a str,
    media: String,
}

#[derive(Debug, Deserialize)]
struct ConnectionStateResponse {
    instance: InstanceState,
}

#[derive(Debug, Deserialize)]
struct InstanceState {
    state: String,
}

/// Gateway media kind for a media type: `image`, `video`, or `document`.
fn media_kind(media_type: &str) -> &'static str {
    match media_type.split('/').next() {
        Some("image") => "image",
        Some("video") => "video",
        _ => "document",
    }
}

/// Reqwest-based client for one WhatsApp gateway instance.
pub struct WhatsAppGateway {
    http: reqwest::Client,
    base_url: String,
    instance: String,
    api_key: String,
    state_rx: watch::Receiver<ConnectionState>,
}

impl WhatsAppGateway {
    /// Creates the gateway client plus its connection monitor. The monitor
    /// owns the single writer side of the state channel; run it with
    /// `tokio::spawn(monitor.run())`.
    pub fn connect(
        base_url: &str,
        instance: &str,
        api_key: &str,
        poll_interval: Duration,
    ) -> (Arc<Self>, ConnectionMonitor) {
        let (state_tx, state_rx) = watch::channel(ConnectionState::Disconnected);
        let gateway = Arc::new(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            instance: instance.to_string(),
            api_key: api_key.to_string(),
            state_rx,
        });
        let monitor = ConnectionMonitor::new(gateway.clone(), state_tx, poll_interval);
        (gateway, monitor)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, path, self.instance)
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<()> {
        let response = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| RelayError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(RelayError::Gateway(format!("HTTP {}: {}", status, detail)));
        }
        Ok(())
    }

    /// Queries the gateway for the instance's current lifecycle state.
    /// Called by the connection monitor on its poll interval.
    pub async fn fetch_connection_state(&self) -> Result<ConnectionState> {
        let url = self.endpoint("instance/connectionState");
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| RelayError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Gateway(format!(
                "connection state query failed: HTTP {}",
                status
            )));
        }
        let parsed: ConnectionStateResponse = response
            .json()
            .await
            .map_err(|e| RelayError::Gateway(e.to_string()))?;
        Ok(ConnectionState::from_gateway(&parsed.instance.state))
    }
}

#[async_trait]
impl DestinationClient for WhatsAppGateway {
    fn connection_state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    async fn send_text(&self, destination: &str, text: &str) -> Result<()> {
        let url = self.endpoint("message/sendText");
        let body = SendTextBody {
            number: destination,
            text,
        };
        self.post_json(&url, &body).await
    }

    async fn send_media(
        &self,
        destination: &str,
        bytes: &[u8],
        media_type: &str,
        caption: &str,
    ) -> Result<()> {
        let url = self.endpoint("message/sendMedia");
        let body = SendMediaBody {
            number: destination,
            mediatype: media_kind(media_type),
            mimetype: media_type,
            caption,
            media: STANDARD.encode(bytes),
        };
        self.post_json(&url, &body).await
    }

    async fn list_groups(&self) -> Result<Vec<GroupInfo>> {
        let url = self.endpoint("group/fetchAllGroups");
        let response = self
            .http
            .get(&url)
            .query(&[("getParticipants", "false")])
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| RelayError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Gateway(format!(
                "group listing failed: HTTP {}",
                status
            )));
        }
        response
            .json::<Vec<GroupInfo>>()
            .await
            .map_err(|e| RelayError::Gateway(e.to_string()))
    }
}
