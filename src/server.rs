//! HTTP upload service.
//!
//! `POST /analyze` takes one multipart image under the `image` field,
//! stores it in the upload directory, and answers with the analysis report
//! plus upload metadata. Failures answer `{"success": false, "error": ...}`.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::analysis::analyze;
use crate::config::AnalyzeOptions;
use crate::error::{AnalyzerError, Result};
use crate::output::Printer;
use crate::types::AnalysisResult;

/// Largest accepted image, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Accepted file extensions, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Slack on top of the image limit for multipart framing.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub upload_dir: PathBuf,
    pub options: AnalyzeOptions,
}

#[derive(Clone)]
struct AppState {
    upload_dir: Arc<PathBuf>,
    options: Arc<AnalyzeOptions>,
    uploads: Arc<AtomicU64>,
}

/// Metadata about the stored upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    /// Name the file was stored under.
    pub filename: String,
    /// Name the client sent.
    pub originalname: String,
    pub size: usize,
    pub mimetype: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadReport {
    #[serde(flatten)]
    result: AnalysisResult,
    file_info: FileInfo,
}

/// Error answered as a JSON envelope.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "success": false, "error": self.message }));
        (self.status, body).into_response()
    }
}

/// Build the service routes. Uploads land in `upload_dir`, which must exist.
pub fn router(upload_dir: PathBuf, options: AnalyzeOptions) -> Router {
    let state = AppState {
        upload_dir: Arc::new(upload_dir),
        options: Arc::new(options),
        uploads: Arc::new(AtomicU64::new(0)),
    };

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/analyze", post(analyze_upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD))
        .with_state(state)
}

/// Create the upload directory, bind, and serve until the process stops.
pub async fn serve(config: ServerConfig, printer: &Printer) -> Result<()> {
    config.options.validate()?;

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|e| AnalyzerError::Io {
            path: config.upload_dir.clone(),
            message: format!("Failed to create upload directory: {}", e),
        })?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    printer.status("Listening", &format!("on http://{}", listener.local_addr()?));

    axum::serve(listener, router(config.upload_dir, config.options)).await?;
    Ok(())
}

async fn index() -> Json<Value> {
    Json(json!({
        "message": "Image Color Analyzer API",
        "endpoints": {
            "analyze": "POST /analyze",
            "health": "GET /health",
        }
    }))
}

async fn health() -> Json<Value> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64);
    Json(json!({ "status": "OK", "timestamp": timestamp }))
}

async fn analyze_upload(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> std::result::Result<Json<UploadReport>, ApiError> {
    let mut multipart = multipart.map_err(|_| ApiError::bad_request("No image file provided"))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let Some(originalname) = field.file_name().map(str::to_string) else {
            continue;
        };

        let extension = allowed_extension(&originalname)
            .ok_or_else(|| ApiError::bad_request("Only image files are allowed!"))?;
        let mimetype = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ApiError::bad_request("File too large (limit is 10 MiB)"));
        }

        let filename = stored_name(&state, &extension);
        let path = state.upload_dir.join(&filename);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to store upload: {}", e)))?;

        let result = run_analysis(path, (*state.options).clone()).await?;
        return Ok(Json(UploadReport {
            result,
            file_info: FileInfo {
                filename,
                originalname,
                size: bytes.len(),
                mimetype,
            },
        }));
    }

    Err(ApiError::bad_request("No image file provided"))
}

async fn run_analysis(path: PathBuf, options: AnalyzeOptions) -> std::result::Result<AnalysisResult, ApiError> {
    tokio::task::spawn_blocking(move || analyze(&path, &options))
        .await
        .map_err(|e| ApiError::internal(format!("Analysis task failed: {}", e)))?
        .map_err(|e| ApiError::internal(e.to_string()))
}

/// Lowercased extension of `filename` if it is an accepted image type.
fn allowed_extension(filename: &str) -> Option<String> {
    let ext = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Unique stored file name: upload time in millis plus a sequence number.
fn stored_name(state: &AppState, extension: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    let seq = state.uploads.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}.{}", millis, seq, extension)
}
