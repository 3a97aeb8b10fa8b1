//! Core model: updates, attachments, payloads, connection state, adapter traits.

pub mod attachment;
pub mod chat;
pub mod client;
pub mod group;
pub mod payload;
pub mod state;
pub mod update;

pub use attachment::{Attachment, AttachmentRef};
pub use chat::Chat;
pub use client::{DestinationClient, SourceClient, ToCoreUpdate};
pub use group::GroupInfo;
pub use payload::OutboundPayload;
pub use state::ConnectionState;
pub use update::{Content, Update};
