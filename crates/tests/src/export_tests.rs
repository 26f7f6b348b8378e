use axum::http::{header, StatusCode};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use crate::common;

const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn is_zip(bytes: &[u8]) -> bool {
    bytes.len() > 4 && &bytes[..2] == b"PK"
}

#[tokio::test]
async fn test_export_all_classes() {
    let (app, _pool, _guard) = common::test_app().await;
    common::create_absence(&app, "Lune", "01/10/2026", "Petit", "N").await;
    common::create_absence(&app, "Salle 5", "02/10/2026", "Grand", "O").await;

    let (status, headers, bytes) = common::get_raw(&app, "/api/export/excel").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], XLSX);
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains("absences_toutes_classes.xlsx"));
    assert!(is_zip(&bytes));

    assert_eq!(
        common::xlsx_sheet_names(&bytes),
        vec!["Résumé", "Salle 5", "Lune"]
    );
    assert_eq!(common::xlsx_row_count(&bytes, 1), 19);
    assert_eq!(common::xlsx_row_count(&bytes, 2), 2);
    assert_eq!(common::xlsx_row_count(&bytes, 3), 2);

    let strings = common::xlsx_part(&bytes, "xl/sharedStrings.xml");
    for text in ["Classe", "Absences Récentes", "Prénom", "Justifié", "Petit", "Grand"] {
        assert!(strings.contains(text), "missing {text}");
    }
}

#[tokio::test]
async fn test_export_all_keeps_every_class_past_the_row_limit() {
    let (app, pool, _guard) = common::test_app().await;
    common::insert_absence_at(&pool, "Lune", "N", Utc::now() - Duration::days(30)).await;
    common::insert_many(&pool, "Salle 2", 1000, Utc::now()).await;

    let (status, _, bytes) = common::get_raw(&app, "/api/export/excel").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        common::xlsx_sheet_names(&bytes),
        vec!["Résumé", "Salle 2", "Lune"]
    );
    assert_eq!(common::xlsx_row_count(&bytes, 2), 1001);
    assert_eq!(common::xlsx_row_count(&bytes, 3), 2);
}

#[tokio::test]
async fn test_export_single_class() {
    let (app, _pool, _guard) = common::test_app().await;
    common::create_absence(&app, "Salle 2", "01/10/2026", "Petit", "O").await;
    common::create_absence(&app, "Lune", "01/10/2026", "Ailleurs", "O").await;

    let (status, headers, bytes) = common::get_raw(&app, "/api/export/excel?classe=Salle%202").await;
    assert_eq!(status, StatusCode::OK);
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.contains("absences_Salle 2.xlsx"));
    assert!(is_zip(&bytes));
    assert_eq!(common::xlsx_sheet_names(&bytes), vec!["Salle 2"]);
    assert_eq!(common::xlsx_row_count(&bytes, 1), 2);
}

#[tokio::test]
async fn test_export_accented_class_encodes_filename() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, headers, _) = common::get_raw(&app, "/api/export/excel?classe=%C3%89toile").await;
    assert_eq!(status, StatusCode::OK);
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.contains("filename*=UTF-8''absences_%C3%89toile.xlsx"));
}

#[tokio::test]
async fn test_export_unknown_class_falls_back_to_all() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, headers, bytes) = common::get_raw(&app, "/api/export/excel?classe=Mars").await;
    assert_eq!(status, StatusCode::OK);
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.contains("absences_toutes_classes.xlsx"));
    assert_eq!(common::xlsx_sheet_names(&bytes), vec!["Résumé"]);
}
