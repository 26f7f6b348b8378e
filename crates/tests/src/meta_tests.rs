use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_root_banner() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, body) = common::get(&app, "/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "API du Suivi des Absences Scolaires");
}

#[tokio::test]
async fn test_classes_in_display_order() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, body) = common::get(&app, "/api/classes").await;
    assert_eq!(status, StatusCode::OK);

    let classes: Vec<&str> = body["classes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert_eq!(classes.len(), 18);
    assert_eq!(classes.first(), Some(&"Salle 2"));
    assert_eq!(classes.last(), Some(&"Étoile"));
    assert!(classes.contains(&"Arc-en-ciel"));
}

#[tokio::test]
async fn test_health_reports_connected_database() {
    let (app, _pool, _guard) = common::test_app().await;
    common::create_absence(&app, "Lune", "02/10/2026", "Roux", "O").await;

    let (status, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "connected");
    assert_eq!(body["absences"], 1);
}
