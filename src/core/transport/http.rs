//! HTTP transport implementation.
//!
//! Serves the portal page, the router's `open` endpoint, the tool pages from
//! the site root, a small JSON API and the PDF compressor endpoint.

use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, Multipart, Path, Request, State},
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use std::collections::HashMap;
use std::path::PathBuf;
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::PortalServer;
use crate::core::security::resolve_site_path;
use crate::domains::compress::{CompressionLevel, CompressionRequest, DocumentMetadata};
use crate::domains::pages::{Notice, NoticeKind};
use crate::domains::tools::definitions::PdfCompressorTool;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The portal server instance.
    server: PortalServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: PortalServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on http://{} (CORS {})", addr, cors_status);
        info!("  → Portal:    GET /");
        info!("  → Open tool: GET /open/{{id}}");
        info!("  → Tools API: GET /api/tools");
        info!("  → Health:    GET /health");

        axum::serve(listener, app)
            .await
            .map_err(TransportError::Serve)?;

        Ok(())
    }
}

/// Build the axum router for a portal server.
pub fn build_router(server: PortalServer, enable_cors: bool) -> Router {
    let upload_limit = server.config().compression.max_upload_bytes;
    let compress_path = format!("/{}", PdfCompressorTool::ACTION);

    let mut app = Router::new()
        .route("/", get(portal_handler))
        .route("/index.html", get(portal_handler))
        .route("/open/{id}", get(open_handler))
        .route("/api/tools", get(tools_handler))
        .route("/health", get(health_check))
        .route(&compress_path, post(compress_handler))
        .route("/{*path}", get(site_file_handler))
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { server });

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Render the portal page with an optional notice.
fn portal_response(state: &AppState, notice: Option<&Notice>) -> Response {
    let status = match notice.map(|n| n.kind) {
        Some(NoticeKind::NotFound) => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };

    match state.server.render_served_portal(notice) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render portal page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Portal landing page.
async fn portal_handler(State(state): State<AppState>) -> Response {
    portal_response(&state, None)
}

/// Resolve a tool selection: redirect to its page or show a notice.
#[instrument(skip_all)]
async fn open_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.server.open(&id) {
        Ok(nav) => Redirect::to(&format!("/{}", nav.href)).into_response(),
        Err(notice) => portal_response(&state, Some(&notice)),
    }
}

/// Registry as JSON.
async fn tools_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "tools": state.server.list_tools()
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "name": state.server.name(),
        "version": state.server.version(),
        "tools": state.server.registry().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Built-in tool pages, then files from the site root.
#[instrument(skip_all)]
async fn site_file_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request,
) -> Response {
    if let Some(page) = state.server.render_builtin(&path) {
        return match page {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                error!("Failed to render built-in page {}: {}", path, e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        };
    }

    let file = match resolve_site_path(&path, &state.server.config().site) {
        Ok(file) if file.is_file() => file,
        Ok(_) => return portal_response(&state, Some(&Notice::page_not_found(&path))),
        Err(e) => {
            warn!("Rejected site path {}: {}", path, e);
            return portal_response(&state, Some(&Notice::page_not_found(&path)));
        }
    };

    match ServeFile::new(&file).oneshot(request).await {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}

/// Compress an uploaded PDF and send it back as an attachment.
#[instrument(skip_all)]
async fn compress_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut upload: Option<(String, Bytes)> = None;
    let mut fields: HashMap<String, String> = HashMap::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return (e.status(), format!("Invalid form: {}", e.body_text())).into_response(),
        };

        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or_default().to_string();
            match field.bytes().await {
                Ok(data) => upload = Some((filename, data)),
                Err(e) => {
                    warn!("Rejected upload {}: {}", filename, e);
                    return (e.status(), format!("Invalid upload: {}", e.body_text()))
                        .into_response();
                }
            }
        } else {
            match field.text().await {
                Ok(value) => {
                    fields.insert(name, value);
                }
                Err(e) => {
                    return (e.status(), format!("Invalid field: {}", e.body_text()))
                        .into_response();
                }
            }
        }
    }

    let Some((raw_filename, data)) = upload else {
        return (StatusCode::BAD_REQUEST, "No file uploaded").into_response();
    };
    let filename = sanitize_filename(&raw_filename);
    if filename.is_empty() {
        return (StatusCode::BAD_REQUEST, "Empty file name").into_response();
    }

    let level = CompressionLevel::parse_or_default(
        fields.get("compression_level").map(String::as_str),
    );
    let stem = std::path::Path::new(&filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let metadata = DocumentMetadata::from_raw(
        fields.remove("title"),
        fields.remove("author"),
        fields.remove("subject"),
        fields.remove("created_date"),
        fields.remove("modified_date"),
    )
    .with_default_title(&stem);

    let upload_dir = state.server.config().compression.upload_dir.clone();
    if let Err(e) = tokio::fs::create_dir_all(&upload_dir).await {
        error!("Cannot create upload directory {}: {}", upload_dir.display(), e);
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response();
    }

    let id = Uuid::new_v4();
    let request = CompressionRequest {
        input: upload_dir.join(format!("{}_{}", id, filename)),
        output: upload_dir.join(format!("{}_compressed_{}", id, filename)),
        level,
        metadata,
    };
    let _cleanup = TempFiles(vec![request.input.clone(), request.output.clone()]);

    if let Err(e) = tokio::fs::write(&request.input, &data).await {
        error!("Cannot store upload: {}", e);
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response();
    }

    info!("Compressing upload {} ({} bytes, level {})", filename, data.len(), level);

    let service = state.server.compression().clone();
    let job = request.clone();
    let result = tokio::task::spawn_blocking(move || service.compress(&job)).await;

    let report = match result {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => {
            warn!("Compression of {} failed: {}", filename, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response();
        }
        Err(e) => {
            error!("Compression task panicked: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error: compression task failed")
                .into_response();
        }
    };

    let content = match tokio::fs::read(&report.output).await {
        Ok(content) => content,
        Err(e) => {
            error!("Cannot read compressed output: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response();
        }
    };

    info!("Sending compressed_{}: {}", filename, report.summary());

    let disposition = format!("attachment; filename=\"compressed_{}\"", filename);
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"compressed.pdf\""));

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    )
        .into_response()
}

/// Files removed when the request completes, whatever the outcome.
struct TempFiles(Vec<PathBuf>);

impl Drop for TempFiles {
    fn drop(&mut self) {
        for path in &self.0 {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    warn!("Failed to remove {}: {}", path.display(), e);
                }
            }
        }
    }
}

/// Keep only the final component of a client-supplied file name, without
/// quotes or control characters.
fn sanitize_filename(name: &str) -> String {
    let last = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = last
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned == "." || cleaned == ".." {
        return String::new();
    }
    cleaned.to_string()
}
