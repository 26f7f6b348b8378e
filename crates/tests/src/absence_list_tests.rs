use axum::http::StatusCode;
use chrono::{Duration, Utc};
use crate::common;

#[tokio::test]
async fn test_list_empty() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, body) = common::get(&app, "/api/absences").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_newest_first() {
    let (app, pool, _guard) = common::test_app().await;
    let now = Utc::now();
    common::insert_absence_at(&pool, "Lune", "O", now - Duration::days(3)).await;
    common::insert_absence_at(&pool, "Soleil", "O", now - Duration::days(1)).await;
    common::insert_absence_at(&pool, "Nuage", "O", now - Duration::days(2)).await;

    let (_, body) = common::get(&app, "/api/absences").await;
    let classes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["classe"].as_str().unwrap())
        .collect();
    assert_eq!(classes, vec!["Soleil", "Nuage", "Lune"]);
}

#[tokio::test]
async fn test_list_filters_by_class() {
    let (app, _pool, _guard) = common::test_app().await;
    common::create_absence(&app, "Salle 2", "01/10/2026", "Petit", "O").await;
    common::create_absence(&app, "Salle 12", "01/10/2026", "Grand", "N").await;
    common::create_absence(&app, "Salle 2", "02/10/2026", "Moyen", "O").await;

    let (status, body) = common::get(&app, "/api/absences?classe=Salle%202").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|a| a["classe"] == "Salle 2"));
}

#[tokio::test]
async fn test_list_filters_accented_class() {
    let (app, _pool, _guard) = common::test_app().await;
    common::create_absence(&app, "Étoile", "01/10/2026", "Petit", "O").await;
    common::create_absence(&app, "Lune", "01/10/2026", "Grand", "O").await;

    let (_, body) = common::get(&app, "/api/absences?classe=%C3%89toile").await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nom"], "Petit");
}

#[tokio::test]
async fn test_list_unknown_class_is_unfiltered() {
    let (app, _pool, _guard) = common::test_app().await;
    common::create_absence(&app, "Lune", "01/10/2026", "Petit", "O").await;
    common::create_absence(&app, "Soleil", "01/10/2026", "Grand", "O").await;

    let (status, body) = common::get(&app, "/api/absences?classe=Mars").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}
