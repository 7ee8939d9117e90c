//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path as UrlPath, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::error;

use crate::domain::LineId;
use crate::gazetteer::DiscoveryIndex;

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory, including the
/// wasm package under `pkg/`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/geodata", get(geodata))
        .route("/api/lines", get(lines))
        .route("/api/lines/:id", get(line))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The game page.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = IndexTemplate::new(&state.bundle_json, &state.config)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
    Ok(Html(html))
}

/// The full geodata bundle, as inlined in the page.
async fn geodata(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.bundle_json.to_string(),
    )
        .into_response()
}

/// Every tracked line with its color and station count.
async fn lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .gazetteer
        .lines()
        .iter()
        .map(LineSummary::from_dataset)
        .collect();

    Json(LinesResponse {
        lines,
        distinct_stations: DiscoveryIndex::build(&state.gazetteer).len(),
        total_stations: state.config.total_stations,
    })
}

/// A single line.
async fn line(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<LineSummary>, AppError> {
    let id = LineId::parse(&id).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let dataset = state.gazetteer.line(&id).ok_or_else(|| AppError::NotFound {
        message: format!("No line {}", id),
    })?;

    Ok(Json(LineSummary::from_dataset(dataset)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
