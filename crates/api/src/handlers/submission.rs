//! Handlers for the public submission endpoints.
//!
//! Payloads are persisted exactly as submitted: no schema, no
//! deduplication, no format checks beyond presence.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use atelier_core::error::CoreError;
use atelier_db::collection;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload for successful submissions.
#[derive(Serialize)]
pub struct SubmissionResponse {
    pub message: &'static str,
}

/// POST /api/contact -- persist an arbitrary contact payload.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    let payload = parse_payload(payload).ok_or_else(|| AppError::validation("No data provided"))?;

    state
        .store
        .insert(collection::CONTACTS, to_document(&payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            message: "Contact submitted",
        }),
    ))
}

/// POST /api/subscribe -- persist a subscriber payload.
///
/// Requires an `email` key; nothing else is validated and duplicates
/// are accepted.
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    let payload = parse_payload(payload)
        .filter(|payload| payload.get("email").is_some())
        .ok_or_else(|| AppError::validation("Email is required"))?;

    state
        .store
        .insert(collection::SUBSCRIBERS, to_document(&payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            message: "Subscribed",
        }),
    ))
}

/// Extract a usable JSON payload from the request, if one arrived.
///
/// Absent, unparseable, and empty bodies are all treated the same way,
/// as are `null` and `{}`.
fn parse_payload(payload: Result<Json<Value>, JsonRejection>) -> Option<Value> {
    match payload {
        Ok(Json(value)) if !is_empty(&value) => Some(value),
        _ => None,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn to_document(payload: &Value) -> Result<bson::Document, AppError> {
    bson::to_document(payload).map_err(|e| AppError::Core(CoreError::Internal(e.to_string())))
}
