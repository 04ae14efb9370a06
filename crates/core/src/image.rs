//! Inline image payloads.
//!
//! Uploaded images are stored inside the document itself as a data URL
//! (`data:<media-type>;base64,<payload>`), so the frontend can embed them
//! without a separate file fetch.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Media type assumed when an upload carries no content type.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Encode raw image bytes as a self-describing data URL.
pub fn data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}
