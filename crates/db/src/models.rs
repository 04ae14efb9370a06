//! Typed documents stored by the backend.
//!
//! Contacts and subscribers are deliberately untyped (arbitrary JSON
//! persisted verbatim), so only the admin-created records and the
//! counter document get structs here.

use serde::{Deserialize, Serialize};

/// Auto-increment counter document, one per named sequence.
///
/// Keyed by the sequence name so the atomic `$inc` and its upsert
/// target the same document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counter {
    #[serde(rename = "_id")]
    pub sequence_name: String,
    pub sequence_value: i64,
}

/// A portfolio project added through the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Application-level identifier issued by the sequence generator.
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Inline image payload (`data:<media-type>;base64,...`).
    pub image_url: String,
}

/// A client/testimonial entry added through the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub designation: String,
    pub image_url: String,
}
