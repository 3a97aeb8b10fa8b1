//! Core model and utilities shared by the pipeline and both adapters.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    Attachment, AttachmentRef, Chat, ConnectionState, Content, DestinationClient, GroupInfo,
    OutboundPayload, SourceClient, ToCoreUpdate, Update,
};
