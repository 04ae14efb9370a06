pub mod status;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, content, submission};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /projects            -> list_projects
/// GET  /clients             -> list_clients
/// POST /contact             -> submit_contact
/// POST /subscribe           -> subscribe
/// POST /admin/project       -> add_project (multipart)
/// POST /admin/client        -> add_client (multipart)
/// GET  /admin/contacts      -> list_contacts
/// GET  /admin/subscribers   -> list_subscribers
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(content::list_projects))
        .route("/clients", get(content::list_clients))
        .route("/contact", post(submission::submit_contact))
        .route("/subscribe", post(submission::subscribe))
        .nest("/admin", admin_routes())
}

/// Routes mounted at `/admin`.
///
/// Uploads are read fully into memory with no size cap, so the default
/// body limit is lifted here.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/project", post(admin::add_project))
        .route("/client", post(admin::add_client))
        .route("/contacts", get(admin::list_contacts))
        .route("/subscribers", get(admin::list_subscribers))
        .layer(DefaultBodyLimit::disable())
}
