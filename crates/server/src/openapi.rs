use axum::http::HeaderValue;
use axum::Router;
use shared_types::{
    Absence, AppError, AppErrorKind, ClassStatistic, Classe, ClassesResponse,
    CreateAbsenceRequest, Justifie, MessageResponse, Motif,
};
use sqlx::{Pool, Postgres};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::meta::root,
        rest::meta::list_classes,
        rest::absence::list_absences,
        rest::absence::create_absence,
        rest::absence::delete_absence,
        rest::stats::class_stats,
        rest::export::export_excel,
        health::health_check,
    ),
    components(schemas(
        Absence, CreateAbsenceRequest, ClassStatistic, ClassesResponse, MessageResponse,
        Classe, Motif, Justifie, AppError, AppErrorKind,
        health::HealthResponse,
    )),
    tags(
        (name = "meta", description = "API banner and reference data"),
        (name = "absences", description = "Absence recording and listing"),
        (name = "stats", description = "Per-class absence statistics"),
        (name = "export", description = "Spreadsheet export"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Suivi des Absences API",
        description = "School absence tracking API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`,
/// the REST API at `/api/*` and the health check at `/health`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(cors_layer(crate::config::cors_origins()))
}

/// CORS policy: any origin when `origins` is `None`, otherwise the listed ones.
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(origins: Option<Vec<String>>) -> CorsLayer {
    let allow_origin = match origins {
        None => AllowOrigin::any(),
        Some(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(v) => Some(v),
                    Err(_) => {
                        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
