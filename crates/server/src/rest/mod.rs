pub mod absence;
pub mod export;
pub mod meta;
pub mod stats;

use axum::{routing::{delete, get}, Router};
use crate::db::AppState;

/// Build the REST API router for absence tracking.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/", get(meta::root))
        .route("/api/classes", get(meta::list_classes))
        .route(
            "/api/absences",
            get(absence::list_absences).post(absence::create_absence),
        )
        .route("/api/absences/{id}", delete(absence::delete_absence))
        .route("/api/stats", get(stats::class_stats))
        .route("/api/export/excel", get(export::export_excel))
}
