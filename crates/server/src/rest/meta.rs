use axum::Json;
use shared_types::{ClassesResponse, MessageResponse, ALL_CLASSES};

/// API banner.
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "API banner", body = MessageResponse)
    ),
    tag = "meta"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("API du Suivi des Absences Scolaires"))
}

/// The fixed list of classes, in display order.
#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "All classes", body = ClassesResponse)
    ),
    tag = "meta"
)]
pub async fn list_classes() -> Json<ClassesResponse> {
    Json(ClassesResponse {
        classes: ALL_CLASSES.to_vec(),
    })
}
