//! Handlers for the admin endpoints.
//!
//! Admin writes accept multipart form submissions (text fields plus an
//! `image` file part). The image bytes are read fully into memory and
//! stored inline in the document as a data URL; the record gets the
//! next application-level ID from the store's sequence generator.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use atelier_core::error::CoreError;
use atelier_core::image::{data_url, FALLBACK_MEDIA_TYPE};
use atelier_db::collection;
use atelier_db::models::{Client, Project};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload for admin writes.
#[derive(Serialize)]
pub struct Created<T: Serialize> {
    pub message: &'static str,
    pub data: Stored<T>,
}

/// A persisted record plus the store-assigned identifier as an opaque
/// string. The identifier is only surfaced here; public reads never
/// include it.
#[derive(Serialize)]
pub struct Stored<T: Serialize> {
    #[serde(flatten)]
    pub record: T,
    #[serde(rename = "_id")]
    pub storage_id: String,
}

/// POST /api/admin/project -- add a project with an inline image.
pub async fn add_project(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<Created<Project>>)> {
    let form = read_form(multipart).await?;

    let image = form
        .image
        .ok_or_else(|| AppError::validation("No image uploaded"))?;

    let (name, description) = match (non_empty(form.name), non_empty(form.description)) {
        (Some(name), Some(description)) => (name, description),
        _ => return Err(AppError::validation("Name and description are required")),
    };

    let image_url = data_url(&image.media_type, &image.bytes);
    let id = state.store.next_sequence(collection::PROJECTS).await?;

    let project = Project {
        id,
        name,
        description,
        image_url,
    };
    let document = bson::to_document(&project).map_err(internal)?;
    let storage_id = state.store.insert(collection::PROJECTS, document).await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "Project created",
            data: Stored {
                record: project,
                storage_id: storage_id.to_hex(),
            },
        }),
    ))
}

/// POST /api/admin/client -- add a client with an inline image.
pub async fn add_client(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<Created<Client>>)> {
    let form = read_form(multipart).await?;

    let image = form
        .image
        .ok_or_else(|| AppError::validation("No image uploaded"))?;

    let (name, description, designation) = match (
        non_empty(form.name),
        non_empty(form.description),
        non_empty(form.designation),
    ) {
        (Some(name), Some(description), Some(designation)) => (name, description, designation),
        _ => {
            return Err(AppError::validation(
                "Name, description, and designation are required",
            ))
        }
    };

    let image_url = data_url(&image.media_type, &image.bytes);
    let id = state.store.next_sequence(collection::CLIENTS).await?;

    let client = Client {
        id,
        name,
        description,
        designation,
        image_url,
    };
    let document = bson::to_document(&client).map_err(internal)?;
    let storage_id = state.store.insert(collection::CLIENTS, document).await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "Client added",
            data: Stored {
                record: client,
                storage_id: storage_id.to_hex(),
            },
        }),
    ))
}

/// Response payload for `GET /api/admin/contacts`.
#[derive(Serialize)]
pub struct ContactsResponse {
    pub contacts: Vec<Value>,
}

/// Response payload for `GET /api/admin/subscribers`.
#[derive(Serialize)]
pub struct SubscribersResponse {
    pub subscribers: Vec<Value>,
}

/// GET /api/admin/contacts -- every submitted contact, verbatim.
pub async fn list_contacts(State(state): State<AppState>) -> AppResult<Json<ContactsResponse>> {
    let documents = state.store.find_all(collection::CONTACTS).await?;
    Ok(Json(ContactsResponse {
        contacts: super::documents_to_json(documents),
    }))
}

/// GET /api/admin/subscribers -- every subscriber, verbatim.
pub async fn list_subscribers(
    State(state): State<AppState>,
) -> AppResult<Json<SubscribersResponse>> {
    let documents = state.store.find_all(collection::SUBSCRIBERS).await?;
    Ok(Json(SubscribersResponse {
        subscribers: super::documents_to_json(documents),
    }))
}

/// The recognized parts of an admin multipart submission.
#[derive(Default)]
struct AdminForm {
    image: Option<ImagePart>,
    name: Option<String>,
    description: Option<String>,
    designation: Option<String>,
}

struct ImagePart {
    media_type: String,
    bytes: Vec<u8>,
}

/// Drain the multipart stream into its recognized parts.
///
/// Unknown field names are skipped. A request that is not multipart at
/// all is reported the same way as a missing file part.
async fn read_form(multipart: Result<Multipart, MultipartRejection>) -> Result<AdminForm, AppError> {
    let mut multipart = multipart.map_err(|_| AppError::validation("No image uploaded"))?;

    let mut form = AdminForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(e.to_string()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "image" => {
                let media_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_MEDIA_TYPE)
                    .to_string();
                let bytes = field.bytes().await.map_err(internal)?;
                form.image = Some(ImagePart {
                    media_type,
                    bytes: bytes.to_vec(),
                });
            }
            "name" => form.name = Some(field.text().await.map_err(internal)?),
            "description" => form.description = Some(field.text().await.map_err(internal)?),
            "designation" => form.designation = Some(field.text().await.map_err(internal)?),
            _ => {}
        }
    }

    Ok(form)
}

/// Treat missing and empty-string form fields the same way.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn internal(err: impl std::fmt::Display) -> AppError {
    AppError::Core(CoreError::Internal(err.to_string()))
}
