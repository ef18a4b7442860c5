use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/tracking/{booking_id}", get(track_booking))
}

/// Resolve a booking id against the simulated location feed. Unknown ids
/// come back as an inline not-found, never a crash.
async fn track_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let record = state.tracking.track(&booking_id).await?;
    Ok(Json(json!({
        "bookingId": booking_id,
        "tracking": record,
        "refreshSeconds": state.rules.tracking_refresh_seconds,
    })))
}
