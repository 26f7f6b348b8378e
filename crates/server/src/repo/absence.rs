use chrono::{DateTime, Utc};
use shared_types::{AbsenceRecord, AppError, Classe, CreateAbsenceRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const ABSENCE_COLUMNS: &str =
    "id, classe, date, nom, prenom, motif, justifie, remarques, created_at";

/// Raw per-class counters as returned by the aggregate query.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ClassCountRow {
    pub classe: String,
    pub total: i64,
    pub unjustified: i64,
    pub recent: i64,
}

/// Insert a new absence. The request must already be validated.
pub async fn create(
    pool: &Pool<Postgres>,
    req: &CreateAbsenceRequest,
) -> Result<AbsenceRecord, AppError> {
    let sql = format!(
        "INSERT INTO absences (classe, date, nom, prenom, motif, justifie, remarques) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING {ABSENCE_COLUMNS}"
    );

    sqlx::query_as::<_, AbsenceRecord>(&sql)
        .bind(&req.classe)
        .bind(&req.date)
        .bind(&req.nom)
        .bind(&req.prenom)
        .bind(&req.motif)
        .bind(&req.justifie)
        .bind(req.remarques.as_deref().unwrap_or(""))
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// List absences, newest first, optionally restricted to one class.
pub async fn list(
    pool: &Pool<Postgres>,
    classe: Option<Classe>,
    limit: i64,
) -> Result<Vec<AbsenceRecord>, AppError> {
    let rows = match classe {
        Some(c) => {
            let sql = format!(
                "SELECT {ABSENCE_COLUMNS} FROM absences \
                 WHERE classe = $1 \
                 ORDER BY created_at DESC \
                 LIMIT $2"
            );
            sqlx::query_as::<_, AbsenceRecord>(&sql)
                .bind(c.as_str())
                .bind(limit)
                .fetch_all(pool)
                .await
        }
        None => {
            let sql = format!(
                "SELECT {ABSENCE_COLUMNS} FROM absences \
                 ORDER BY created_at DESC \
                 LIMIT $1"
            );
            sqlx::query_as::<_, AbsenceRecord>(&sql)
                .bind(limit)
                .fetch_all(pool)
                .await
        }
    };

    rows.map_err(SqlxErrorExt::into_app_error)
}

/// Delete an absence. Returns true if a row was actually deleted.
pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM absences WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}

/// Count absences per class: total, unjustified, and created since `recent_since`.
/// Classes without any absence are absent from the result.
pub async fn count_by_class(
    pool: &Pool<Postgres>,
    recent_since: DateTime<Utc>,
) -> Result<Vec<ClassCountRow>, AppError> {
    sqlx::query_as::<_, ClassCountRow>(
        r#"
        SELECT classe,
               COUNT(*) AS total,
               COUNT(*) FILTER (WHERE justifie = 'N') AS unjustified,
               COUNT(*) FILTER (WHERE created_at >= $1) AS recent
        FROM absences
        GROUP BY classe
        "#,
    )
    .bind(recent_since)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
