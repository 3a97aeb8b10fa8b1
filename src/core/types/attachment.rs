//! Attachment reference and resolved attachment types.

use serde::{Deserialize, Serialize};

/// Opaque reference to a file on the source side. Resolvable to bytes via
/// the Source Adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    pub file_id: String,
}

impl AttachmentRef {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

/// A downloaded attachment: raw bytes plus the path the source declared for it.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub bytes: Vec<u8>,
    pub path: String,
}

impl Attachment {
    /// Media type inferred from the declared path's extension;
    /// `application/octet-stream` when the extension is unknown or missing.
    pub fn media_type(&self) -> String {
        mime_guess::from_path(&self.path)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}
