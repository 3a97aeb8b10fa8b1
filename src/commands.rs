//! Private-chat command surface: `/help`, `/debug`, `/listgroups`.
//!
//! Commands are answered directly on the source side and never reach the
//! forwarding path. `/listgroups` talks to the destination adapter and
//! requires the outbound connection to be ready.

use std::sync::Arc;

use tracing::warn;

use crate::core::{ConnectionState, DestinationClient, Result, SourceClient, Update};

const HELP_TEXT: &str = "Available commands:\n\
/help - show this message\n\
/debug - show this chat's id\n\
/listgroups - list WhatsApp groups the relay can reach";

/// Answers slash commands arriving in private chats.
pub struct CommandResponder {
    source: Arc<dyn SourceClient>,
    destination: Arc<dyn DestinationClient>,
}

impl CommandResponder {
    pub fn new(source: Arc<dyn SourceClient>, destination: Arc<dyn DestinationClient>) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Replies to `text` (already known to start with `/`) in the update's
    /// own chat. Arguments after the command word are ignored.
    pub async fn respond(&self, update: &Update, text: &str) -> Result<()> {
        let command = text.split_whitespace().next().unwrap_or(text);
        let reply = match command {
            "/help" => HELP_TEXT.to_string(),
            "/debug" => format!("chat id: {}", update.chat.id),
            "/listgroups" => self.list_groups().await,
            other => format!("unknown command {}, try /help", other),
        };
        self.source.send_message(update.chat.id, &reply).await
    }

    async fn list_groups(&self) -> String {
        match self.destination.connection_state() {
            ConnectionState::Ready => {}
            state => {
                return format!("WhatsApp connection is not ready (state: {}), try again shortly", state)
            }
        }
        match self.destination.list_groups().await {
            Ok(groups) if groups.is_empty() => "no groups visible to the relay".to_string(),
            Ok(groups) => groups
                .iter()
                .map(|g| format!("{} ({})", g.subject, g.id))
                .collect::<Vec<_>>()
                .join("\n"),
            Err(e) => {
                warn!(error = %e, "group listing failed");
                format!("failed to list groups: {}", e)
            }
        }
    }
}
