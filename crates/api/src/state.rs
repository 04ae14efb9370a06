use std::sync::Arc;

use atelier_db::DocumentStore;

use crate::config::AppConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Constructed once at startup and cloned into each handler; the store
/// and config travel here instead of living in process-wide globals.
#[derive(Clone)]
pub struct AppState {
    /// Document-store handle (MongoDB in production, in-memory in tests).
    pub store: Arc<dyn DocumentStore>,
    /// Server configuration.
    pub config: Arc<AppConfig>,
}
