use axum::{
    extract::{Path, State},
    routing::put,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;
use ridelane_booking::BookingStatus;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/admin/bookings/{id}/status", put(update_status))
}

#[derive(Debug, Deserialize)]
struct StatusRequest {
    status: BookingStatus,
}

/// Administrative status transition. Bookings are never deleted; a
/// cancellation is recorded as a status change.
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusRequest>,
) -> Result<Json<Value>, AppError> {
    state.manager.transition_status(&id, req.status).await?;
    let booking = state.manager.find(&id).await?;
    Ok(Json(json!({ "booking": booking })))
}
