use chrono::{DateTime, Duration, Utc};
use shared_types::{AppError, ClassStatistic, Classe, ALL_CLASSES};
use sqlx::{Pool, Postgres};

use crate::repo::absence::ClassCountRow;

/// Per-class statistics as of `now`, one row per class in display order.
pub async fn collect(pool: &Pool<Postgres>, now: DateTime<Utc>) -> Result<Vec<ClassStatistic>, AppError> {
    let settings = crate::config::absence_settings();
    let since = recent_window_start(now, settings.recent_window_days);
    let rows = crate::repo::absence::count_by_class(pool, since).await?;
    Ok(per_class(&rows))
}

/// Start of the "recent" window: midnight UTC of the current day, minus `days`.
/// Absences created at or after this instant count as recent.
pub fn recent_window_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    let midnight = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now);
    midnight - Duration::days(days)
}

/// Expand aggregate rows into one statistic per class, in display order.
/// Classes missing from `rows` get zero counters; unknown class names are dropped.
pub fn per_class(rows: &[ClassCountRow]) -> Vec<ClassStatistic> {
    let mut stats: Vec<ClassStatistic> = ALL_CLASSES.iter().copied().map(ClassStatistic::empty).collect();

    for row in rows {
        match Classe::from_str_opt(&row.classe) {
            Some(classe) => {
                let slot = &mut stats[classe.index()];
                slot.total_absences = row.total;
                slot.absences_non_justifiees = row.unjustified;
                slot.absences_recentes = row.recent;
            }
            None => tracing::warn!(classe = %row.classe, "ignoring counts for unknown class"),
        }
    }

    stats
}
