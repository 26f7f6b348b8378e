//! HTTP access to the absence backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared_types::{Absence, AppError, ClassStatistic, Classe, CreateAbsenceRequest};

/// Backend used when `BACKEND_URL` is not configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response (backend unreachable, CORS, DNS...).
    #[error("backend unreachable: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Server { status: u16, message: String },
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response from its status code and body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 404 {
            ApiError::NotFound
        } else {
            ApiError::Server {
                status,
                message: AppError::friendly_message(body),
            }
        }
    }
}

/// Operations the absence tracker needs from its backend.
#[async_trait(?Send)]
pub trait AbsenceApi {
    /// Every absence, in the order the server returns them.
    async fn list_absences(&self) -> Result<Vec<Absence>, ApiError>;

    /// One statistic row per class.
    async fn list_statistics(&self) -> Result<Vec<ClassStatistic>, ApiError>;

    /// Record an absence. The created record in the response is not needed.
    async fn create_absence(&self, request: &CreateAbsenceRequest) -> Result<(), ApiError>;

    /// Delete an absence by identifier.
    async fn delete_absence(&self, id: &str) -> Result<(), ApiError>;

    /// URL of the spreadsheet export, for one class or for all of them.
    fn export_url(&self, classe: Option<Classe>) -> String;
}

/// Base URL of the backend.
///
/// Web builds bake `BACKEND_URL` in at compile time; native builds also
/// honour it at runtime. Trailing slashes are dropped.
pub fn backend_url() -> String {
    let configured = option_env!("BACKEND_URL")
        .map(str::to_string)
        .or_else(|| std::env::var("BACKEND_URL").ok())
        .filter(|url| !url.trim().is_empty());

    match configured {
        Some(url) => url.trim().trim_end_matches('/').to_string(),
        None => DEFAULT_BACKEND_URL.to_string(),
    }
}

/// Build the export URL under `base`, with the class percent-encoded.
pub fn export_url(base: &str, classe: Option<Classe>) -> String {
    match classe {
        Some(c) => format!(
            "{base}/api/export/excel?classe={}",
            urlencoding::encode(c.as_str())
        ),
        None => format!("{base}/api/export/excel"),
    }
}

/// `AbsenceApi` over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpAbsenceApi {
    client: reqwest::Client,
    base: String,
}

impl HttpAbsenceApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// Client for the backend named by `BACKEND_URL`.
    pub fn from_env() -> Self {
        Self::new(backend_url())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base, path)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Pass successful responses through; turn the others into an `ApiError`.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status.as_u16(), &body))
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AbsenceApi for HttpAbsenceApi {
    async fn list_absences(&self) -> Result<Vec<Absence>, ApiError> {
        let response = self
            .client
            .get(self.url("/absences"))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn list_statistics(&self) -> Result<Vec<ClassStatistic>, ApiError> {
        let response = self
            .client
            .get(self.url("/stats"))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn create_absence(&self, request: &CreateAbsenceRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/absences"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        check(response).await.map(|_| ())
    }

    async fn delete_absence(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/absences/{}", urlencoding::encode(id))))
            .send()
            .await
            .map_err(transport)?;
        check(response).await.map(|_| ())
    }

    fn export_url(&self, classe: Option<Classe>) -> String {
        export_url(&self.base, classe)
    }
}
