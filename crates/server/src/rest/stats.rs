use axum::{extract::State, Json};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, ClassStatistic};

/// Per-class counters: total, unjustified, and recorded in the recent window.
/// Always returns one row per class, in display order.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Statistics for every class", body = Vec<ClassStatistic>)
    ),
    tag = "stats"
)]
pub async fn class_stats(
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<ClassStatistic>>, AppError> {
    let stats = crate::statistics::collect(&pool, chrono::Utc::now()).await?;
    Ok(Json(stats))
}
