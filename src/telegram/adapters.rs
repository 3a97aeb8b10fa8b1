//! Conversion from teloxide messages to core updates.

use chrono::Utc;

use crate::core::{AttachmentRef, Chat, ToCoreUpdate, Update};

fn chat_kind(chat: &teloxide::types::Chat) -> String {
    if chat.is_private() {
        "private".to_string()
    } else if chat.is_channel() {
        "channel".to_string()
    } else if chat.is_supergroup() {
        "supergroup".to_string()
    } else {
        "group".to_string()
    }
}

/// Telegram message (or channel post; both arrive as `Message`) to core
/// [`Update`] converter.
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreUpdate for TelegramUpdateWrapper<'_> {
    fn to_core(&self) -> Update {
        let msg = self.0;
        Update {
            id: msg.id.to_string(),
            chat: Chat {
                id: msg.chat.id.0,
                kind: chat_kind(&msg.chat),
            },
            text: msg.text().map(str::to_string),
            caption: msg.caption().map(str::to_string),
            // Telegram orders photo sizes smallest to largest.
            photo: msg
                .photo()
                .map(|sizes| {
                    sizes
                        .iter()
                        .map(|p| AttachmentRef::new(p.file.id.0.clone()))
                        .collect()
                })
                .unwrap_or_default(),
            video: msg.video().map(|v| AttachmentRef::new(v.file.id.0.clone())),
            document: msg
                .document()
                .map(|d| AttachmentRef::new(d.file.id.0.clone())),
            created_at: Utc::now(),
        }
    }
}
