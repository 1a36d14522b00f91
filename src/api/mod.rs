//! HTTP API handlers

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tracing::debug;

use crate::config::Config;
use crate::ssr;
use crate::theme::{resolve_initial_scheme, ColorScheme, ColorSchemeController};

/// Static files compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    started: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started: Instant::now(),
        }
    }
}

/// All routes of the service. The WASM client bundle is served from
/// `config.client_dir` under `/assets`.
pub fn router(state: AppState) -> Router {
    let client = ServeDir::new(&state.config.client_dir);

    Router::new()
        .route("/", get(page_handler))
        .route("/status", get(status_handler))
        .route("/api/color-scheme", post(color_scheme_handler))
        .route("/favicon.svg", get(favicon_handler))
        .nest_service("/assets", client)
        .with_state(state)
}

/// GET / - Render the page with the scheme from the request cookie
pub async fn page_handler(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let scheme = resolve_initial_scheme(&jar);
    debug!(%scheme, "Rendering page");
    Html(ssr::render_page(&state.config.title, scheme))
}

/// Body of POST /api/color-scheme. `null` or a missing field toggles.
#[derive(Debug, Default, Deserialize)]
pub struct ColorSchemeRequest {
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorSchemeResponse {
    pub color_scheme: ColorScheme,
}

/// POST /api/color-scheme - Set or toggle the persisted scheme
pub async fn color_scheme_handler(
    jar: CookieJar,
    Json(request): Json<ColorSchemeRequest>,
) -> (CookieJar, Json<ColorSchemeResponse>) {
    let mut controller = ColorSchemeController::new(resolve_initial_scheme(&jar), jar);
    let color_scheme = controller.toggle_or_set(request.color_scheme);

    (
        controller.into_store(),
        Json(ColorSchemeResponse { color_scheme }),
    )
}

/// General status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub service: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

/// GET /favicon.svg
pub async fn favicon_handler() -> Response {
    serve_asset("favicon.svg")
}

fn serve_asset(path: &str) -> Response {
    match Assets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref().to_string())], file.data).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
