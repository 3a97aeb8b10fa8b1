//! Destination-side group identity, as reported by the outbound connection.

use serde::{Deserialize, Serialize};

/// One group reachable by the outbound connection (`/listgroups`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub id: String,
    pub subject: String,
}
