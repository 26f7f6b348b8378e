use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::Value;
use crate::common;

fn row<'a>(stats: &'a Value, classe: &str) -> &'a Value {
    stats
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["classe"] == classe)
        .unwrap_or_else(|| panic!("no statistics row for {classe}"))
}

#[tokio::test]
async fn test_stats_one_row_per_class_when_empty() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, body) = common::get(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 18);
    assert_eq!(rows[0]["classe"], "Salle 2");
    assert_eq!(rows[17]["classe"], "Étoile");
    assert!(rows.iter().all(|r| r["total_absences"] == 0
        && r["absences_non_justifiees"] == 0
        && r["absences_recentes"] == 0));
}

#[tokio::test]
async fn test_stats_counts_per_class() {
    let (app, _pool, _guard) = common::test_app().await;
    common::create_absence(&app, "Salle 2", "01/10/2026", "A", "O").await;
    common::create_absence(&app, "Salle 2", "02/10/2026", "B", "N").await;
    common::create_absence(&app, "Salle 2", "03/10/2026", "C", "O").await;
    common::create_absence(&app, "Lune", "03/10/2026", "D", "O").await;

    let (_, body) = common::get(&app, "/api/stats").await;
    let salle2 = row(&body, "Salle 2");
    assert_eq!(salle2["total_absences"], 3);
    assert_eq!(salle2["absences_non_justifiees"], 1);
    assert_eq!(salle2["absences_recentes"], 3);

    let lune = row(&body, "Lune");
    assert_eq!(lune["total_absences"], 1);
    assert_eq!(lune["absences_non_justifiees"], 0);

    assert_eq!(row(&body, "Soleil")["total_absences"], 0);
}

#[tokio::test]
async fn test_stats_recent_window_excludes_old_records() {
    let (app, pool, _guard) = common::test_app().await;
    let now = Utc::now();
    common::insert_absence_at(&pool, "Nuage", "N", now - Duration::days(30)).await;
    common::insert_absence_at(&pool, "Nuage", "O", now - Duration::days(10)).await;
    common::insert_absence_at(&pool, "Nuage", "O", now - Duration::hours(1)).await;

    let (_, body) = common::get(&app, "/api/stats").await;
    let nuage = row(&body, "Nuage");
    assert_eq!(nuage["total_absences"], 3);
    assert_eq!(nuage["absences_non_justifiees"], 1);
    assert_eq!(nuage["absences_recentes"], 1);
}
