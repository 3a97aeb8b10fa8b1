//! # Fan-out dispatcher
//!
//! Replays one outbound payload to every configured destination. Delivery is
//! best-effort and independent per destination: a failed send is logged with
//! the destination id and the loop moves on. Nothing is retried and no
//! success/failure count is reported back to the pipeline.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{DestinationClient, OutboundPayload};

/// Fans one payload out to a fixed, ordered destination list. Duplicate
/// entries are delivered twice; the list never changes after startup.
#[derive(Clone)]
pub struct Broadcaster {
    client: Arc<dyn DestinationClient>,
    destinations: Vec<String>,
}

impl Broadcaster {
    pub fn new(client: Arc<dyn DestinationClient>, destinations: Vec<String>) -> Self {
        Self {
            client,
            destinations,
        }
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Sends `payload` to each destination in list order. Per-destination
    /// failures are swallowed after logging so one bad destination cannot
    /// block the rest.
    pub async fn broadcast(&self, payload: &OutboundPayload) {
        for destination in &self.destinations {
            let result = match payload {
                OutboundPayload::Text(text) => self.client.send_text(destination, text).await,
                OutboundPayload::Media {
                    bytes,
                    media_type,
                    caption,
                } => {
                    self.client
                        .send_media(destination, bytes, media_type, caption)
                        .await
                }
            };

            match result {
                Ok(()) => debug!(destination = %destination, "delivered"),
                Err(e) => warn!(
                    destination = %destination,
                    error = %e,
                    "send failed, continuing with remaining destinations"
                ),
            }
        }
    }
}
