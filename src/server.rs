//! HTTP server for the listing.
//!
//! Serves the rendered page plus a small JSON API over the same
//! [`Catalog`]. The server starts accepting connections immediately with a
//! loading catalog and groups the data file on a blocking task, so clients
//! can observe `is_loading` until the one-time load completes.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Rendered HTML page (`?q=` filters) |
//! | `GET`  | `/api/groups` | Full grouped listing |
//! | `GET`  | `/api/search?q=` | Filtered listing with status and count |
//! | `GET`  | `/api/theme` | Current theme preference |
//! | `PUT`  | `/api/theme` | Set theme (`{"dark_mode": bool}`) |
//! | `POST` | `/api/theme/toggle` | Flip theme |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "..." } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404), `internal` (500).

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tower_http::cors::{Any, CorsLayer};

use linkshelf_core::catalog::{Catalog, ListingStatus};
use linkshelf_core::models::Group;

use crate::config::Config;
use crate::data;
use crate::render::render_page;
use crate::theme::{PreferenceStore, Theme};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    catalog: Arc<RwLock<Catalog>>,
    preferences: Arc<PreferenceStore>,
    /// Held around every preference read and write.
    preferences_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// State with a catalog that has not been loaded yet.
    pub fn new(config: &Config) -> Self {
        Self {
            config: Arc::new(config.clone()),
            catalog: Arc::new(RwLock::new(Catalog::loading())),
            preferences: Arc::new(PreferenceStore::new(&config.preferences.path)),
            preferences_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the data file on a blocking task and swap in the ready catalog.
    ///
    /// A data file that cannot be parsed leaves the listing empty rather
    /// than stuck in the loading state.
    pub async fn load(&self) {
        let config = self.config.clone();
        let loaded = tokio::task::spawn_blocking(move || data::load_catalog(&config)).await;

        let catalog = match loaded {
            Ok(Ok(catalog)) => catalog,
            Ok(Err(e)) => {
                tracing::error!(error = %format!("{:#}", e), "failed to load website data");
                Catalog::from_entries(&[])
            }
            Err(e) => {
                tracing::error!(error = %e, "data loading task failed");
                Catalog::from_entries(&[])
            }
        };

        *self.catalog.write().await = catalog;
    }

    async fn load_theme(&self) -> anyhow::Result<Theme> {
        let _guard = self.preferences_lock.lock().await;
        let store = self.preferences.clone();
        Ok(tokio::task::spawn_blocking(move || store.load()).await?)
    }

    async fn save_theme(&self, theme: Theme) -> anyhow::Result<()> {
        let _guard = self.preferences_lock.lock().await;
        let store = self.preferences.clone();
        tokio::task::spawn_blocking(move || store.save(theme)).await?
    }

    async fn toggle_theme(&self) -> anyhow::Result<Theme> {
        let _guard = self.preferences_lock.lock().await;
        let store = self.preferences.clone();
        tokio::task::spawn_blocking(move || store.toggle()).await?
    }
}

/// Build the router over `state`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_page))
        .route("/api/groups", get(handle_groups))
        .route("/api/search", get(handle_search))
        .route("/api/theme", get(handle_get_theme).put(handle_put_theme))
        .route("/api/theme/toggle", post(handle_toggle_theme))
        .route("/health", get(handle_health))
        .fallback(handle_not_found)
        .layer(cors)
        .with_state(state)
}

/// Starts the HTTP server.
///
/// Binds to `[server].bind`, starts the background data load, and serves
/// until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    if !config.data.path.exists() {
        anyhow::bail!("Data file not found: {}", config.data.path.display());
    }

    let state = AppState::new(config);
    let loader = state.clone();
    tokio::spawn(async move { loader.load().await });

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;

    tracing::info!(bind = %config.server.bind, "server listening");
    println!("Listening on http://{}", config.server.bind);

    axum::serve(listener, app).await?;
    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Error type that converts into a JSON HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

fn internal(err: anyhow::Error) -> AppError {
    tracing::error!(error = %format!("{:#}", err), "request failed");
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "internal".to_string(),
        message: err.to_string(),
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn handle_not_found() -> AppError {
    not_found("no such route")
}

// ============ Listing ============

#[derive(Debug, Deserialize, Default)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
struct GroupsResponse {
    is_loading: bool,
    total_entries: usize,
    groups: Vec<Group>,
}

#[derive(Serialize)]
struct SearchResponse {
    is_loading: bool,
    query: String,
    status: ListingStatus,
    total_entries: usize,
    groups: Vec<Group>,
}

async fn handle_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let theme = state.load_theme().await.map_err(internal)?;
    let catalog = state.catalog.read().await;
    Ok(Html(
        render_page(&state.config.site, &catalog, &params.q, theme).into_string(),
    ))
}

async fn handle_groups(State(state): State<AppState>) -> Json<GroupsResponse> {
    let catalog = state.catalog.read().await;
    Json(GroupsResponse {
        is_loading: catalog.is_loading(),
        total_entries: catalog.total_entries(),
        groups: catalog.groups().to_vec(),
    })
}

async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let catalog = state.catalog.read().await;
    let view = catalog.search(&params.q);
    let status = catalog.status_of(&view);
    tracing::debug!(query = %params.q, entries = view.total_entries, "search");

    Json(SearchResponse {
        is_loading: catalog.is_loading(),
        query: params.q.trim().to_string(),
        status,
        total_entries: view.total_entries,
        groups: view.groups,
    })
}

// ============ Theme ============

#[derive(Serialize)]
struct ThemeResponse {
    theme: &'static str,
    dark_mode: bool,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            theme: theme.as_str(),
            dark_mode: theme.is_dark(),
        }
    }
}

#[derive(Deserialize)]
struct ThemeRequest {
    dark_mode: bool,
}

async fn handle_get_theme(State(state): State<AppState>) -> Result<Json<ThemeResponse>, AppError> {
    let theme = state.load_theme().await.map_err(internal)?;
    Ok(Json(theme.into()))
}

async fn handle_put_theme(
    State(state): State<AppState>,
    body: Result<Json<ThemeRequest>, JsonRejection>,
) -> Result<Json<ThemeResponse>, AppError> {
    let Json(req) = body.map_err(|e| bad_request(e.body_text()))?;
    let theme = Theme::from_dark_mode(req.dark_mode);
    state.save_theme(theme).await.map_err(internal)?;
    Ok(Json(theme.into()))
}

async fn handle_toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme = state.toggle_theme().await.map_err(internal)?;
    Ok(Json(theme.into()))
}
