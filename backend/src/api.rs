use crate::config::ServerConfig;
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use move_engine::api::{parse_depth, select_move_in, Difficulty};
use move_engine::{Board, EngineError, SearchBudget};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

pub const HEALTH_MESSAGE: &str = "Chess Engine Backend is running";

#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MoveRequest {
    #[serde(default)]
    pub fen: Option<String>,
    /// Sent by clients as a number, a numeric string or null
    #[serde(default)]
    pub depth: Option<Value>,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub best_move: Option<String>,
}

/// Failures reported to HTTP clients as `{ "error": ..., "detail"?: ... }`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request has no position")]
    MissingFen,

    #[error("Malformed request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Search task failed: {0}")]
    SearchFailed(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::MissingFen => "missing_fen",
            ApiError::InvalidBody(_) => "invalid_body",
            ApiError::Engine(EngineError::InvalidPosition { .. }) => "invalid_fen",
            ApiError::Engine(EngineError::InvalidParameter { .. }) => "invalid_parameter",
            ApiError::SearchFailed(_) => "search_failed",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::SearchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::MissingFen | ApiError::SearchFailed(_) => json!({ "error": self.code() }),
            _ => json!({ "error": self.code(), "detail": self.to_string() }),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub fn router(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(health))
        .route("/move", post(get_move))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// Depth for a request: explicit `depth` wins, then `level`, then the default
fn resolve_depth(request: &MoveRequest, default_depth: u32) -> Result<u32, EngineError> {
    match (&request.depth, &request.level) {
        (Some(depth), _) if !depth.is_null() => parse_depth(depth, default_depth),
        (_, Some(level)) => Ok(level.parse::<Difficulty>()?.depth()),
        _ => Ok(default_depth),
    }
}

async fn get_move(
    State(state): State<AppState>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected move request body");
        ApiError::InvalidBody(rejection.body_text())
    })?;

    let fen = match request.fen.as_deref().map(str::trim) {
        Some(fen) if !fen.is_empty() => fen.to_string(),
        _ => {
            warn!("Move request without a position");
            return Err(ApiError::MissingFen);
        }
    };

    let depth = resolve_depth(&request, state.config.default_depth).inspect_err(|e| {
        warn!(error = %e, "Rejected search parameters");
    })?;
    let budget = SearchBudget::new(depth, state.config.max_time_secs)?;
    let mut board = Board::from_fen(&fen).inspect_err(|e| {
        warn!(error = %e, "Rejected position");
    })?;

    info!(%fen, depth, "Searching");

    let best_move = tokio::task::spawn_blocking(move || select_move_in(&mut board, &budget))
        .await
        .map_err(|e| {
            error!(error = %e, "Search task did not complete");
            ApiError::SearchFailed(e.to_string())
        })?;

    Ok(Json(MoveResponse { best_move }))
}
