//! # Forwarding pipeline
//!
//! The decision-making component: gates each inbound update on source
//! identity and outbound readiness, classifies the payload, resolves
//! attachments through the Source Adapter, and hands the result to the
//! fan-out dispatcher. Every gate drops silently with only a log side
//! effect; no error ever escapes [`ForwardPipeline::handle`].

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::commands::CommandResponder;
use crate::core::{
    ConnectionState, Content, DestinationClient, OutboundPayload, Result, SourceClient, Update,
};
use crate::dispatch::Broadcaster;

/// One-way forwarding pipeline from the configured source chat to the
/// destination list. Shared across handler tasks behind an `Arc`.
pub struct ForwardPipeline {
    source_chat_id: String,
    source: Arc<dyn SourceClient>,
    destination: Arc<dyn DestinationClient>,
    broadcaster: Broadcaster,
    commands: CommandResponder,
}

impl ForwardPipeline {
    pub fn new(
        source_chat_id: String,
        destinations: Vec<String>,
        source: Arc<dyn SourceClient>,
        destination: Arc<dyn DestinationClient>,
    ) -> Self {
        let broadcaster = Broadcaster::new(destination.clone(), destinations);
        let commands = CommandResponder::new(source.clone(), destination.clone());
        Self {
            source_chat_id,
            source,
            destination,
            broadcaster,
            commands,
        }
    }

    /// Handles one inbound update. Infallible by contract: a malformed
    /// update or a failed download is logged and dropped, never propagated,
    /// so one bad update cannot stall the ones behind it.
    pub async fn handle(&self, update: &Update) {
        if let Err(e) = self.process(update).await {
            error!(update_id = %update.id, error = %e, "update dropped: handler failed");
        }
    }

    async fn process(&self, update: &Update) -> Result<()> {
        // Commands run on the private-chat path, before the identity gate.
        if update.chat.is_private() {
            if let Some(text) = update.text.as_deref() {
                if text.starts_with('/') {
                    return self.commands.respond(update, text).await;
                }
            }
        }

        if update.chat.id.to_string() != self.source_chat_id {
            debug!(
                chat_id = update.chat.id,
                "update not from the configured source, ignoring"
            );
            return Ok(());
        }

        match self.destination.connection_state() {
            ConnectionState::Ready => {}
            state => {
                warn!(
                    update_id = %update.id,
                    state = %state,
                    "outbound connection not ready, dropping update"
                );
                return Ok(());
            }
        }

        match update.classify() {
            Content::Text(text) => {
                if text.trim().is_empty() {
                    return Ok(());
                }
                info!(update_id = %update.id, "forwarding text");
                self.broadcaster
                    .broadcast(&OutboundPayload::Text(text.to_string()))
                    .await;
            }
            Content::Photo(reference)
            | Content::Video(reference)
            | Content::Document(reference) => {
                let attachment = self.source.download_attachment(reference).await?;
                let media_type = attachment.media_type();
                info!(
                    update_id = %update.id,
                    media_type = %media_type,
                    size = attachment.bytes.len(),
                    "forwarding media"
                );
                self.broadcaster
                    .broadcast(&OutboundPayload::Media {
                        bytes: attachment.bytes,
                        media_type,
                        caption: update.caption_text().to_string(),
                    })
                    .await;
            }
            Content::Empty => {
                info!(update_id = %update.id, "unsupported update shape, ignoring");
            }
        }

        Ok(())
    }
}
