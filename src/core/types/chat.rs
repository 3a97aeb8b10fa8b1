//! Chat identity type for core updates.

use serde::{Deserialize, Serialize};

/// Chat (channel, group, or private conversation) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub kind: String,
}

impl Chat {
    /// True for one-on-one conversations; commands are only accepted here.
    pub fn is_private(&self) -> bool {
        self.kind == "private"
    }
}
