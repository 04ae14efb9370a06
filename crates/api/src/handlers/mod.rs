//! HTTP request handlers.

pub mod admin;
pub mod content;
pub mod submission;

use bson::{Bson, Document};
use serde_json::Value;

/// Convert stored BSON documents into plain JSON for responses.
///
/// Everything this backend stores is a plain JSON shape (inserted from
/// a JSON body or a typed model), so relaxed Extended JSON renders the
/// documents back verbatim.
pub(crate) fn documents_to_json(documents: Vec<Document>) -> Vec<Value> {
    documents
        .into_iter()
        .map(|document| Bson::Document(document).into_relaxed_extjson())
        .collect()
}
