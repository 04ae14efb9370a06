//! Handlers for the public content endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use atelier_db::collection;

use crate::error::AppResult;
use crate::state::AppState;

/// Response payload for `GET /api/projects`.
#[derive(Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Value>,
}

/// Response payload for `GET /api/clients`.
#[derive(Serialize)]
pub struct ClientsResponse {
    pub clients: Vec<Value>,
}

/// GET /api/projects -- every stored project, verbatim.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<Json<ProjectsResponse>> {
    let documents = state.store.find_all(collection::PROJECTS).await?;
    Ok(Json(ProjectsResponse {
        projects: super::documents_to_json(documents),
    }))
}

/// GET /api/clients -- every stored client, verbatim.
pub async fn list_clients(State(state): State<AppState>) -> AppResult<Json<ClientsResponse>> {
    let documents = state.store.find_all(collection::CLIENTS).await?;
    Ok(Json(ClientsResponse {
        clients: super::documents_to_json(documents),
    }))
}
