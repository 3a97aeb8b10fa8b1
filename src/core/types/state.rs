//! Destination connection state.

use std::fmt;

/// Lifecycle state of the outbound connection. Owned by the Destination
/// Adapter's monitor (single writer); the pipeline only reads it. Sends are
/// attempted only in `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Authenticating,
    Ready,
}

impl ConnectionState {
    /// Maps a gateway state string (`open` / `connecting` / `close`) to a
    /// [`ConnectionState`]. Unknown strings are treated as disconnected.
    pub fn from_gateway(state: &str) -> Self {
        match state {
            "open" => ConnectionState::Ready,
            "connecting" => ConnectionState::Authenticating,
            _ => ConnectionState::Disconnected,
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Authenticating => "authenticating",
            ConnectionState::Ready => "ready",
        };
        f.write_str(s)
    }
}
