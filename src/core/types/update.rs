//! Core inbound update type and payload classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{attachment::AttachmentRef, chat::Chat};

/// One inbound update from the source connection (direct message or channel
/// post). Carries at most one meaningful payload out of text, photo, video,
/// or document, plus an optional caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub id: String,
    pub chat: Chat,
    pub text: Option<String>,
    pub caption: Option<String>,
    /// Photo renditions ordered low → high resolution; only the last is forwarded.
    pub photo: Vec<AttachmentRef>,
    pub video: Option<AttachmentRef>,
    pub document: Option<AttachmentRef>,
    pub created_at: DateTime<Utc>,
}

/// Classified payload of an [`Update`]. Photo carries only the
/// highest-resolution reference.
#[derive(Debug, PartialEq)]
pub enum Content<'a> {
    Text(&'a str),
    Photo(&'a AttachmentRef),
    Video(&'a AttachmentRef),
    Document(&'a AttachmentRef),
    Empty,
}

impl Update {
    /// Classifies the payload in priority order: plain text (only when no
    /// media is attached), then photo, video, document. Exactly one branch
    /// applies; an update carrying none of them is `Empty`.
    pub fn classify(&self) -> Content<'_> {
        if let Some(text) = self.text.as_deref() {
            if self.photo.is_empty() && self.video.is_none() && self.document.is_none() {
                return Content::Text(text);
            }
        }
        if let Some(photo) = self.photo.last() {
            return Content::Photo(photo);
        }
        if let Some(video) = &self.video {
            return Content::Video(video);
        }
        if let Some(document) = &self.document {
            return Content::Document(document);
        }
        Content::Empty
    }

    /// Caption to attach to forwarded media: explicit caption, else the text
    /// field, else empty string.
    pub fn caption_text(&self) -> &str {
        self.caption
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or("")
    }
}
