use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::models::{FilterUpdate, SearchFilters};
use crate::state::AppState;

/// GET /api/filters - Last-saved filter preferences, or the empty defaults
pub async fn get_filters(State(state): State<AppState>) -> Json<SearchFilters> {
    Json(state.storage.filters().unwrap_or_default())
}

/// POST /api/filters - Validate and replace the single preferences slot.
/// The rejection is handled explicitly so schema failures map to 400
/// rather than axum's default 422.
pub async fn update_filters(
    State(state): State<AppState>,
    payload: Result<Json<FilterUpdate>, JsonRejection>,
) -> Result<Json<SearchFilters>, (StatusCode, String)> {
    let Json(update) = payload.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid filter data: {}", e.body_text()),
        )
    })?;

    Ok(Json(state.storage.update_filters(update)))
}
