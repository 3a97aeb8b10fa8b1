//! Connection lifecycle monitor: polls the gateway's state endpoint and
//! publishes transitions into the watch channel the client reads from.
//! Single writer; a failed poll counts as disconnected.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::core::ConnectionState;

use super::client::WhatsAppGateway;

/// Background task keeping the published [`ConnectionState`] current.
pub struct ConnectionMonitor {
    gateway: Arc<WhatsAppGateway>,
    state_tx: watch::Sender<ConnectionState>,
    poll_interval: Duration,
}

impl ConnectionMonitor {
    pub(super) fn new(
        gateway: Arc<WhatsAppGateway>,
        state_tx: watch::Sender<ConnectionState>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            gateway,
            state_tx,
            poll_interval,
        }
    }

    /// Polls forever. The pipeline may observe a state up to one interval
    /// stale; updates arriving inside that window are dropped, not queued.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        let mut last = ConnectionState::Disconnected;

        loop {
            ticker.tick().await;
            let next = match self.gateway.fetch_connection_state().await {
                Ok(state) => state,
                Err(e) => {
                    warn!(error = %e, "connection state poll failed");
                    ConnectionState::Disconnected
                }
            };
            if next != last {
                info!(from = %last, to = %next, "whatsapp connection state changed");
                last = next;
            }
            self.state_tx.send_replace(next);
        }
    }
}
