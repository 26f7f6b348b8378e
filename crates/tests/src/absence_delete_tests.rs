use axum::http::StatusCode;
use crate::common;

#[tokio::test]
async fn test_delete_absence_success() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_absence(&app, "Lune", "01/10/2026", "Petit", "O").await;

    let (status, body) = common::delete(&app, &format!("/api/absences/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Absence supprimée avec succès");

    let (_, list) = common::get(&app, "/api/absences").await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_absence_not_found() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, body) = common::delete(
        &app,
        "/api/absences/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Absence non trouvée");
}

#[tokio::test]
async fn test_delete_non_uuid_id_not_found() {
    let (app, _pool, _guard) = common::test_app().await;
    common::create_absence(&app, "Lune", "01/10/2026", "Petit", "O").await;

    let (status, body) = common::delete(&app, "/api/absences/non-existent-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
    assert_eq!(body["message"], "Absence non trouvée");

    let (_, list) = common::get(&app, "/api/absences").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_twice_gives_404() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_absence(&app, "Nuage", "01/10/2026", "Petit", "O").await;
    let (s1, _) = common::delete(&app, &format!("/api/absences/{id}")).await;
    assert_eq!(s1, StatusCode::OK);
    let (s2, _) = common::delete(&app, &format!("/api/absences/{id}")).await;
    assert_eq!(s2, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_keeps_other_absences() {
    let (app, _pool, _guard) = common::test_app().await;
    let keep = common::create_absence(&app, "Lune", "01/10/2026", "Garde", "O").await;
    let drop = common::create_absence(&app, "Lune", "02/10/2026", "Retire", "O").await;

    common::delete(&app, &format!("/api/absences/{drop}")).await;

    let (_, list) = common::get(&app, "/api/absences").await;
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![keep.as_str()]);
}
