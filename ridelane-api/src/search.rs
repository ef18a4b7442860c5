use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<NaiveDate>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/trips", get(search_trips))
}

async fn search_trips(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, AppError> {
    let results = state
        .catalog
        .search(params.from.as_deref(), params.to.as_deref(), params.date);

    let trips: Vec<Value> = results
        .iter()
        .map(|trip| {
            json!({
                "id": trip.id,
                "operator": trip.operator,
                "busType": trip.bus_type,
                "route": trip.route(),
                "travelDate": trip.travel_date,
                "departureTime": trip.departure_time,
                "arrivalTime": trip.arrival_time,
                "durationMinutes": trip.duration_minutes(),
                "pricePerSeat": trip.price_per_seat,
                "availableSeats": trip.available_seats,
                "totalSeats": trip.total_seats,
                "facilities": trip.facilities,
                "rating": trip.rating,
            })
        })
        .collect();

    Ok(Json(json!({ "trips": trips })))
}
