//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{debug, error};

use crate::domain::StationId;
use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;

/// Default number of station search results.
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Upper bound on station search results.
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/lines", get(lines))
        .route("/api/stations/search", get(search_stations))
        .route("/api/route", get(route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every line with its station order.
async fn lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .finder
        .network()
        .lines()
        .iter()
        .map(LineResult::from_line)
        .collect();

    Json(LinesResponse { lines })
}

/// Search stations by name or id.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
    let network = state.finder.network();

    let stations = state
        .stations
        .search(&req.q, limit)
        .into_iter()
        .filter_map(|id| network.station(id))
        .map(StationResult::from_station)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Plan a trip between two stations.
async fn route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let from = parse_station(&state, "from", &req.from)?;
    let to = parse_station(&state, "to", &req.to)?;

    let plan = state
        .finder
        .plan(&from, &to)?
        .ok_or_else(|| AppError::NotFound {
            message: format!("no route from {from} to {to}"),
        })?;

    debug!(from = %from, to = %to, steps = plan.steps.len(), "Planned trip");
    Ok(Json(RouteResponse::from_plan(&plan)))
}

/// Parse a station id query parameter and check the station exists.
fn parse_station(state: &AppState, param: &str, value: &str) -> Result<StationId, AppError> {
    let id = StationId::parse(value).map_err(|e| AppError::BadRequest {
        message: format!("invalid {param}: {e}"),
    })?;

    if state.finder.network().station(&id).is_none() {
        return Err(AppError::NotFound {
            message: format!("unknown station: {id}"),
        });
    }
    Ok(id)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        // The planner's invariants are internal; don't leak them to clients.
        error!(error = %e, "Failed to compute directions");
        AppError::Internal {
            message: "could not compute directions".to_string(),
        }
    }
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        };

        debug!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
