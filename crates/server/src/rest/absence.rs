use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{Absence, AppError, Classe, CreateAbsenceRequest, MessageResponse};
use crate::error_convert::ValidateRequest;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct AbsenceListParams {
    /// Restrict to one class. Unknown names are ignored and return every class.
    pub classe: Option<String>,
}

impl AbsenceListParams {
    pub fn class_filter(&self) -> Option<Classe> {
        self.classe.as_deref().and_then(Classe::from_str_opt)
    }
}

/// Convert stored rows into wire records, newest first as stored.
pub(crate) fn into_absences(
    records: Vec<shared_types::AbsenceRecord>,
) -> Result<Vec<Absence>, AppError> {
    records.into_iter().map(Absence::try_from).collect()
}

// ---------------------------------------------------------------------------
// GET /api/absences
// ---------------------------------------------------------------------------

/// List absences, newest first, optionally for a single class.
#[utoipa::path(
    get,
    path = "/api/absences",
    params(AbsenceListParams),
    responses(
        (status = 200, description = "Absences, most recently recorded first", body = Vec<Absence>)
    ),
    tag = "absences"
)]
pub async fn list_absences(
    State(pool): State<Pool<Postgres>>,
    Query(params): Query<AbsenceListParams>,
) -> Result<Json<Vec<Absence>>, AppError> {
    let limit = crate::config::absence_settings().list_limit;
    let records = crate::repo::absence::list(&pool, params.class_filter(), limit).await?;
    Ok(Json(into_absences(records)?))
}

// ---------------------------------------------------------------------------
// POST /api/absences
// ---------------------------------------------------------------------------

/// Record a new absence.
#[utoipa::path(
    post,
    path = "/api/absences",
    request_body = CreateAbsenceRequest,
    responses(
        (status = 200, description = "Absence recorded", body = Absence),
        (status = 400, description = "Invalid field value", body = AppError),
        (status = 422, description = "Malformed body or missing field")
    ),
    tag = "absences"
)]
pub async fn create_absence(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreateAbsenceRequest>,
) -> Result<Json<Absence>, AppError> {
    body.validate_request()?;

    let record = crate::repo::absence::create(&pool, &body).await?;
    tracing::info!(id = %record.id, classe = %record.classe, "absence recorded");

    Ok(Json(Absence::try_from(record)?))
}

// ---------------------------------------------------------------------------
// DELETE /api/absences/{id}
// ---------------------------------------------------------------------------

/// Delete an absence.
#[utoipa::path(
    delete,
    path = "/api/absences/{id}",
    params(
        ("id" = String, Path, description = "Absence UUID")
    ),
    responses(
        (status = 200, description = "Absence deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "absences"
)]
pub async fn delete_absence(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    // An id that cannot exist is reported like any other missing absence.
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::not_found("Absence non trouvée"))?;

    if crate::repo::absence::delete(&pool, uuid).await? {
        tracing::info!(%uuid, "absence deleted");
        Ok(Json(MessageResponse::new("Absence supprimée avec succès")))
    } else {
        Err(AppError::not_found("Absence non trouvée"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_class_filter_is_applied() {
        let params = AbsenceListParams {
            classe: Some("Salle 7".to_string()),
        };
        assert_eq!(params.class_filter(), Some(Classe::Salle7));
    }

    #[test]
    fn unknown_or_missing_class_means_no_filter() {
        let unknown = AbsenceListParams {
            classe: Some("Salle 42".to_string()),
        };
        assert_eq!(unknown.class_filter(), None);
        assert_eq!(AbsenceListParams::default().class_filter(), None);
    }
}
