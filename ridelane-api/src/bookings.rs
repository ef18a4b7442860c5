use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", get(list_bookings))
        .route("/v1/bookings/{id}", get(get_booking))
}

async fn list_bookings(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let bookings = state.manager.list().await?;
    Ok(Json(json!({ "bookings": bookings })))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let booking = state.manager.find(&id).await?;
    Ok(Json(json!({ "booking": booking })))
}
