use axum::http::StatusCode;
use serde_json::json;
use crate::common;

#[tokio::test]
async fn test_create_absence_returns_record() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = json!({
        "classe": "Étoile",
        "date": "15/01/2026",
        "nom": "Martin",
        "prenom": "Léa",
        "motif": "RDV",
        "justifie": "N",
        "remarques": "Dentiste"
    });
    let (status, created) = common::post_json(&app, "/api/absences", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["classe"], "Étoile");
    assert_eq!(created["date"], "15/01/2026");
    assert_eq!(created["nom"], "Martin");
    assert_eq!(created["prenom"], "Léa");
    assert_eq!(created["motif"], "RDV");
    assert_eq!(created["justifie"], "N");
    assert_eq!(created["remarques"], "Dentiste");
    assert!(uuid::Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
    assert!(created["created_at"].is_string());
}

#[tokio::test]
async fn test_create_without_remarques_defaults_to_empty() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = json!({
        "classe": "Nuage",
        "date": "01/10/2026",
        "nom": "Blanc",
        "prenom": "Noé",
        "motif": "F",
        "justifie": "O"
    });
    let (status, created) = common::post_json(&app, "/api/absences", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["remarques"], "");
}

#[tokio::test]
async fn test_create_rejects_unknown_class() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = common::absence_body("Salle 3", "01/10/2026", "Blanc", "O");
    let (status, err) = common::post_json(&app, "/api/absences", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["message"].as_str().unwrap().contains("Classe non valide"));
}

#[tokio::test]
async fn test_create_rejects_impossible_date() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = common::absence_body("Lune", "31/02/2026", "Blanc", "O");
    let (status, err) = common::post_json(&app, "/api/absences", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["message"]
        .as_str()
        .unwrap()
        .contains("Format de date invalide"));
}

#[tokio::test]
async fn test_rejected_create_stores_nothing() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = common::absence_body("Lune", "01/10/2026", "   ", "O");
    let (status, _) = common::post_json(&app, "/api/absences", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = common::get(&app, "/api/absences").await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}
