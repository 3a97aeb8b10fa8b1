//! WhatsApp side: gateway client and connection lifecycle monitor.

pub mod client;
pub mod monitor;

pub use client::WhatsAppGateway;
pub use monitor::ConnectionMonitor;
