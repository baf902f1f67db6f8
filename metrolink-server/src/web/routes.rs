//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::board::{
    BoardError, build_stop_board, build_stop_index, resolve_slug, sorted_alphabetically,
};
use crate::domain::Slug;
use crate::tfgm::FeedError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stops", get(list_stops))
        .route("/api/stops/:slug", get(find_stop))
        .route("/api/stop/:stop", get(stop_board))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All stops, alphabetically.
async fn list_stops(State(state): State<AppState>) -> Result<Json<StopListResponse>, AppError> {
    let index = build_stop_index(state.gateway.as_ref()).await?;

    let stops = sorted_alphabetically(index)
        .iter()
        .map(StopResult::from_entry)
        .collect();

    Ok(Json(StopListResponse { stops }))
}

/// Resolve a URL slug to its stop.
async fn find_stop(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<StopResult>, AppError> {
    let slug = Slug::parse(&slug).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let index = sorted_alphabetically(build_stop_index(state.gateway.as_ref()).await?);

    let entry = resolve_slug(&index, &slug).ok_or_else(|| AppError::NotFound {
        message: format!("No Metrolink stop found matching {slug}"),
    })?;

    Ok(Json(StopResult::from_entry(entry)))
}

/// Departure board for one stop, by exact station name.
async fn stop_board(
    State(state): State<AppState>,
    Path(stop): Path<String>,
) -> Result<Json<StopBoardResponse>, AppError> {
    let board = build_stop_board(state.gateway.as_ref(), &stop).await?;
    Ok(Json(StopBoardResponse::from_board(&board)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl From<BoardError> for AppError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::NotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            BoardError::Upstream(feed) => feed.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
