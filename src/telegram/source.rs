//! Wraps teloxide::Bot and implements [`crate::core::SourceClient`].
//! Production code resolves files via the Telegram Bot API; tests substitute
//! another SourceClient impl.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId};

use crate::core::{Attachment, AttachmentRef, RelayError, Result, SourceClient};

const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Thin wrapper around teloxide::Bot providing attachment download and
/// command replies.
pub struct TelegramSource {
    bot: teloxide::Bot,
    http: reqwest::Client,
    api_url: String,
}

impl TelegramSource {
    /// Creates a source over an existing teloxide Bot. `api_url` overrides
    /// the default Bot API host (for local Bot API servers).
    pub fn new(bot: teloxide::Bot, api_url: Option<String>) -> Self {
        Self {
            bot,
            http: reqwest::Client::new(),
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }

    /// File download URL for a path returned by `getFile`.
    fn file_url(&self, path: &str) -> String {
        format!(
            "{}/file/bot{}/{}",
            self.api_url.trim_end_matches('/'),
            self.bot.token(),
            path
        )
    }
}

#[async_trait]
impl SourceClient for TelegramSource {
    async fn download_attachment(&self, reference: &AttachmentRef) -> Result<Attachment> {
        let file = self
            .bot
            .get_file(FileId(reference.file_id.clone()))
            .await
            .map_err(|e| RelayError::Source(e.to_string()))?;

        let response = self
            .http
            .get(self.file_url(&file.path))
            .send()
            .await
            .map_err(|e| RelayError::Source(e.to_string()))?;
        if !response.status().is_success() {
            return Err(RelayError::Source(format!(
                "file download failed: HTTP {}",
                response.status()
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RelayError::Source(e.to_string()))?
            .to_vec();

        Ok(Attachment {
            bytes,
            path: file.path.clone(),
        })
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .map_err(|e| RelayError::Source(e.to_string()))?;
        Ok(())
    }
}
