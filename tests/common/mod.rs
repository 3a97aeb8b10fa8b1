//! Mock implementations of [`channel_relay::SourceClient`] and
//! [`channel_relay::DestinationClient`] for integration tests.
//!
//! The gateway records every send so tests can assert on delivery count,
//! order, and content without a real WhatsApp connection; the source serves
//! canned attachments and records command replies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::mpsc;

use channel_relay::{
    Attachment, AttachmentRef, Chat, ConnectionState, DestinationClient, GroupInfo, RelayError,
    Result, SourceClient, Update,
};

/// One recorded destination send.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum SendRecord {
    Text {
        destination: String,
        text: String,
    },
    Media {
        destination: String,
        bytes: Vec<u8>,
        media_type: String,
        caption: String,
    },
}

/// Mock destination that records sends and can be told to fail for specific
/// destinations or report a non-ready connection state.
pub struct RecordingGateway {
    state: Mutex<ConnectionState>,
    send_tx: mpsc::UnboundedSender<SendRecord>,
    fail_destinations: Vec<String>,
    groups: Vec<GroupInfo>,
}

#[allow(dead_code)]
impl RecordingGateway {
    /// Ready gateway plus the receiver for its send records.
    pub fn with_receiver() -> (Self, mpsc::UnboundedReceiver<SendRecord>) {
        let (send_tx, send_rx) = mpsc::unbounded_channel();
        (
            Self {
                state: Mutex::new(ConnectionState::Ready),
                send_tx,
                fail_destinations: Vec::new(),
                groups: Vec::new(),
            },
            send_rx,
        )
    }

    pub fn failing_for(mut self, destination: &str) -> Self {
        self.fail_destinations.push(destination.to_string());
        self
    }

    pub fn with_groups(mut self, groups: Vec<GroupInfo>) -> Self {
        self.groups = groups;
        self
    }

    pub fn set_state(&self, state: ConnectionState) {
        *self.state.lock().unwrap() = state;
    }
}

#[async_trait]
impl DestinationClient for RecordingGateway {
    fn connection_state(&self) -> ConnectionState {
        *self.state.lock().unwrap()
    }

    async fn send_text(&self, destination: &str, text: &str) -> Result<()> {
        if self.fail_destinations.iter().any(|d| d == destination) {
            return Err(RelayError::Gateway(format!(
                "simulated send failure for {}",
                destination
            )));
        }
        let _ = self.send_tx.send(SendRecord::Text {
            destination: destination.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_media(
        &self,
        destination: &str,
        bytes: &[u8],
        media_type: &str,
        caption: &str,
    ) -> Result<()> {
        if self.fail_destinations.iter().any(|d| d == destination) {
            return Err(RelayError::Gateway(format!(
                "simulated send failure for {}",
                destination
            )));
        }
        let _ = self.send_tx.send(SendRecord::Media {
            destination: destination.to_string(),
            bytes: bytes.to_vec(),
            media_type: media_type.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }

    async fn list_groups(&self) -> Result<Vec<GroupInfo>> {
        Ok(self.groups.clone())
    }
}

/// Mock source serving canned attachments; records command replies and
/// counts downloads.
pub struct MockSource {
    attachments: HashMap<String, Attachment>,
    downloads: AtomicUsize,
    reply_tx: mpsc::UnboundedSender<(i64, String)>,
}

#[allow(dead_code)]
impl MockSource {
    /// Empty source plus the receiver for `(chat_id, text)` replies.
    pub fn with_receiver() -> (Self, mpsc::UnboundedReceiver<(i64, String)>) {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        (
            Self {
                attachments: HashMap::new(),
                downloads: AtomicUsize::new(0),
                reply_tx,
            },
            reply_rx,
        )
    }

    pub fn with_attachment(mut self, file_id: &str, path: &str, bytes: Vec<u8>) -> Self {
        self.attachments.insert(
            file_id.to_string(),
            Attachment {
                bytes,
                path: path.to_string(),
            },
        );
        self
    }

    pub fn download_count(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceClient for MockSource {
    async fn download_attachment(&self, reference: &AttachmentRef) -> Result<Attachment> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        self.attachments
            .get(&reference.file_id)
            .cloned()
            .ok_or_else(|| {
                RelayError::Source(format!("unknown attachment: {}", reference.file_id))
            })
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let _ = self.reply_tx.send((chat_id, text.to_string()));
        Ok(())
    }
}

/// Bare channel-post update from `chat_id` with no payload.
#[allow(dead_code)]
pub fn channel_update(chat_id: i64) -> Update {
    Update {
        id: "100".to_string(),
        chat: Chat {
            id: chat_id,
            kind: "channel".to_string(),
        },
        text: None,
        caption: None,
        photo: Vec::new(),
        video: None,
        document: None,
        created_at: Utc::now(),
    }
}

/// Private-chat update carrying `text` (for the command path).
#[allow(dead_code)]
pub fn private_update(chat_id: i64, text: &str) -> Update {
    let mut update = channel_update(chat_id);
    update.chat.kind = "private".to_string();
    update.text = Some(text.to_string());
    update
}

/// Drains everything currently buffered in a record channel.
#[allow(dead_code)]
pub fn drain<T>(rx: &mut mpsc::UnboundedReceiver<T>) -> Vec<T> {
    let mut out = Vec::new();
    while let Ok(record) = rx.try_recv() {
        out.push(record);
    }
    out
}
