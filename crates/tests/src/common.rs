use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Global mutex ensuring tests run sequentially against the shared database.
/// Each test holds it from truncation until it finishes.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

/// Build the full API router over a real, empty Postgres database.
/// The returned `MutexGuard` must be held for the duration of the test.
pub async fn test_app() -> (Router, Pool<Postgres>, tokio::sync::MutexGuard<'static, ()>) {
    let guard = TEST_MUTEX.lock().await;

    let _ = dotenvy::dotenv();

    let database_url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("TEST_DATABASE_URL or DATABASE_URL must be set for tests");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE absences")
        .execute(&pool)
        .await
        .expect("Failed to truncate");

    server::health::record_start_time();
    let router = server::openapi::api_router(pool.clone());

    (router, pool, guard)
}

/// A valid create request body.
pub fn absence_body(classe: &str, date: &str, nom: &str, justifie: &str) -> Value {
    json!({
        "classe": classe,
        "date": date,
        "nom": nom,
        "prenom": "Camille",
        "motif": "M",
        "justifie": justifie,
        "remarques": ""
    })
}

/// Create an absence through the API and return its id.
pub async fn create_absence(app: &Router, classe: &str, date: &str, nom: &str, justifie: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/absences",
        &absence_body(classe, date, nom, justifie).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body["id"].as_str().expect("created absence has an id").to_string()
}

/// Insert a row directly with a chosen `created_at`, for time-window tests.
pub async fn insert_absence_at(
    pool: &Pool<Postgres>,
    classe: &str,
    justifie: &str,
    created_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO absences (classe, date, nom, prenom, motif, justifie, remarques, created_at)
         VALUES ($1, '01/01/2026', 'Archive', 'Test', 'A', $2, '', $3)",
    )
    .bind(classe)
    .bind(justifie)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("Failed to insert absence");
}

/// Insert `count` justified absences for one class in a single statement.
pub async fn insert_many(
    pool: &Pool<Postgres>,
    classe: &str,
    count: i64,
    created_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO absences (classe, date, nom, prenom, motif, justifie, remarques, created_at)
         SELECT $1, '01/10/2026', 'Eleve ' || n, 'Test', 'M', 'O', '', $2
         FROM generate_series(1, $3) AS n",
    )
    .bind(classe)
    .bind(created_at)
    .bind(count)
    .execute(pool)
    .await
    .expect("Failed to insert absences");
}

/// One XML part of an XLSX archive.
pub fn xlsx_part(bytes: &[u8], name: &str) -> String {
    use std::io::Read;

    let mut archive =
        zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("export is a zip archive");
    let mut file = archive.by_name(name).expect("part present in workbook");
    let mut xml = String::new();
    file.read_to_string(&mut xml).expect("part is UTF-8 XML");
    xml
}

/// Sheet names of an XLSX workbook, in tab order.
pub fn xlsx_sheet_names(bytes: &[u8]) -> Vec<String> {
    xlsx_part(bytes, "xl/workbook.xml")
        .split("<sheet ")
        .skip(1)
        .filter_map(|tag| {
            let start = tag.find("name=\"")? + 6;
            let len = tag[start..].find('"')?;
            Some(tag[start..start + len].to_string())
        })
        .collect()
}

/// Number of written rows (header included) of the sheet at 1-based `position`.
pub fn xlsx_row_count(bytes: &[u8], position: usize) -> usize {
    xlsx_part(bytes, &format!("xl/worksheets/sheet{position}.xml"))
        .matches("<row ")
        .count()
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body_bytes) = send_raw(app, req).await;

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}

/// Send a request and return raw bytes + status + headers (for the XLSX export).
pub async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    (status, headers, body_bytes.to_vec())
}

/// GET a route and return the raw response.
pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send_raw(app, req).await
}
