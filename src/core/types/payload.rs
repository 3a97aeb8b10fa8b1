//! Outbound payload type passed from the pipeline to the fan-out dispatcher.

/// What gets replayed to every destination: either plain text or a media
/// blob with its inferred media type and caption.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundPayload {
    Text(String),
    Media {
        bytes: Vec<u8>,
        media_type: String,
        caption: String,
    },
}
