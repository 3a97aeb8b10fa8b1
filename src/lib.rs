//! # Telegram → WhatsApp channel relay
//!
//! One-way forwarder: posts from a single configured Telegram channel are
//! replayed into a fixed set of WhatsApp groups through an HTTP gateway.
//! Core (Update, adapter traits), pipeline (gates + classification),
//! dispatch (best-effort fan-out), telegram/whatsapp (the two adapters),
//! and health (liveness probe) are wired together by the runner.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod health;
pub mod pipeline;
pub mod runner;
pub mod telegram;
pub mod whatsapp;

// Re-export CLI
pub use cli::{load_config, Cli, Commands};

// Re-export core
pub use core::{
    init_tracing, Attachment, AttachmentRef, Chat, ConnectionState, Content, DestinationClient,
    GroupInfo, OutboundPayload, RelayError, Result, SourceClient, ToCoreUpdate, Update,
};

pub use config::RelayConfig;
pub use dispatch::Broadcaster;
pub use pipeline::ForwardPipeline;
pub use runner::run_relay;
pub use telegram::{run_dispatcher, TelegramSource, TelegramUpdateWrapper};
pub use whatsapp::{ConnectionMonitor, WhatsAppGateway};
