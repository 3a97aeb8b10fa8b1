//! Adapter traits and transport conversion traits.

use async_trait::async_trait;

use super::{
    attachment::{Attachment, AttachmentRef},
    group::GroupInfo,
    state::ConnectionState,
    update::Update,
};

/// Converts a transport-specific update type to a core [`Update`].
pub trait ToCoreUpdate: Send + Sync {
    fn to_core(&self) -> Update;
}

/// Inbound side: resolves attachment references and answers command replies.
/// Implementations map to a transport (e.g. Telegram); tests substitute mocks.
#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Resolves an attachment reference to raw bytes plus the declared path.
    async fn download_attachment(&self, reference: &AttachmentRef)
        -> crate::core::Result<Attachment>;
    /// Sends a text message back to a source-side chat (command replies only).
    async fn send_message(&self, chat_id: i64, text: &str) -> crate::core::Result<()>;
}

/// Outbound side: readiness query plus text/media delivery to one destination.
#[async_trait]
pub trait DestinationClient: Send + Sync {
    /// Latest observed connection state. Written only by the adapter's own
    /// lifecycle monitor; may lag a transition by one poll interval.
    fn connection_state(&self) -> ConnectionState;
    /// Sends plain text to one destination.
    async fn send_text(&self, destination: &str, text: &str) -> crate::core::Result<()>;
    /// Sends a media blob with caption to one destination.
    async fn send_media(
        &self,
        destination: &str,
        bytes: &[u8],
        media_type: &str,
        caption: &str,
    ) -> crate::core::Result<()>;
    /// Enumerates groups visible to the outbound connection.
    async fn list_groups(&self) -> crate::core::Result<Vec<GroupInfo>>;
}
