use axum::{
    extract::{Path, State},
    routing::{post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;
use ridelane_booking::{BookingFlow, Passenger};
use ridelane_catalog::{demo_layout, SeatToggle};
use ridelane_core::payment::PaymentMethod;
use ridelane_core::BookingError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/sessions", post(start_session))
        .route("/v1/sessions/{id}", axum::routing::get(session_view))
        .route("/v1/sessions/{id}/seats/{seat_id}", post(toggle_seat))
        .route("/v1/sessions/{id}/continue", post(proceed_to_passengers))
        .route("/v1/sessions/{id}/back", post(back_to_seats))
        .route("/v1/sessions/{id}/passengers", put(submit_roster))
        .route("/v1/sessions/{id}/pay", post(pay))
}

#[derive(Debug, Deserialize)]
struct StartSessionRequest {
    trip_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct RosterRequest {
    passengers: Vec<Passenger>,
}

#[derive(Debug, Deserialize)]
struct PayRequest {
    method: PaymentMethod,
}

fn flow_view(session_id: Uuid, flow: &BookingFlow) -> Value {
    let quote = flow.quote();
    json!({
        "sessionId": session_id,
        "step": flow.step(),
        "trip": {
            "id": flow.trip().id,
            "route": flow.trip().route(),
            "operator": flow.trip().operator,
            "pricePerSeat": flow.trip().price_per_seat,
        },
        "selectedSeats": flow.selection().seat_ids(),
        "quote": {
            "baseFare": quote.base_fare,
            "taxes": quote.taxes,
            "total": quote.total,
        },
    })
}

async fn start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Result<Json<Value>, AppError> {
    let trip = state
        .catalog
        .find(req.trip_id)
        .ok_or_else(|| BookingError::NotFound(req.trip_id.to_string()))?
        .clone();

    let flow = BookingFlow::with_tax_rate(trip, demo_layout(), state.rules.tax_rate);
    let session_id = Uuid::new_v4();
    let view = flow_view(session_id, &flow);
    state.flows.lock().await.insert(session_id, flow);
    tracing::info!(%session_id, "booking session started");
    Ok(Json(view))
}

async fn session_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let flows = state.flows.lock().await;
    let flow = flows
        .get(&id)
        .ok_or_else(|| BookingError::NotFound(id.to_string()))?;
    Ok(Json(flow_view(id, flow)))
}

async fn toggle_seat(
    State(state): State<AppState>,
    Path((id, seat_id)): Path<(Uuid, String)>,
) -> Result<Json<Value>, AppError> {
    let mut flows = state.flows.lock().await;
    let flow = flows
        .get_mut(&id)
        .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

    // The "up to 6 passengers" rule lives here at the surface, not in the
    // seat model; deselection is always allowed.
    if !flow.selection().contains(&seat_id)
        && flow.selection().len() >= state.rules.max_seats_per_booking
    {
        return Err(BookingError::ValidationIncomplete(format!(
            "at most {} seats per booking",
            state.rules.max_seats_per_booking
        ))
        .into());
    }

    let toggled = flow.toggle_seat(&seat_id)?;
    let mut view = flow_view(id, flow);
    view["toggled"] = json!(match toggled {
        SeatToggle::Selected => "selected",
        SeatToggle::Deselected => "deselected",
    });
    Ok(Json(view))
}

async fn proceed_to_passengers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let mut flows = state.flows.lock().await;
    let flow = flows
        .get_mut(&id)
        .ok_or_else(|| BookingError::NotFound(id.to_string()))?;
    flow.proceed_to_passengers()?;
    Ok(Json(flow_view(id, flow)))
}

async fn back_to_seats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let mut flows = state.flows.lock().await;
    let flow = flows
        .get_mut(&id)
        .ok_or_else(|| BookingError::NotFound(id.to_string()))?;
    flow.back_to_seats()?;
    Ok(Json(flow_view(id, flow)))
}

async fn submit_roster(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RosterRequest>,
) -> Result<Json<Value>, AppError> {
    let mut flows = state.flows.lock().await;
    let flow = flows
        .get_mut(&id)
        .ok_or_else(|| BookingError::NotFound(id.to_string()))?;
    flow.submit_roster(req.passengers)?;
    Ok(Json(flow_view(id, flow)))
}

async fn pay(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PayRequest>,
) -> Result<Json<Value>, AppError> {
    // Payment requires a signed-in profile; the storefront redirects to
    // login here, the engine surfaces the missing precondition.
    let user = state
        .session_repo
        .load_user()
        .await?
        .ok_or_else(|| BookingError::NotFound("user profile".to_string()))?;

    // Take the flow out of the map so the charge runs without holding the
    // session lock; put it back if anything fails.
    let mut flow = state
        .flows
        .lock()
        .await
        .remove(&id)
        .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

    let result = state
        .manager
        .finalize(&mut flow, &state.payments, req.method, user.id.clone())
        .await;

    match result {
        Ok(record) => {
            // The flow is spent; the session is gone for good.
            Ok(Json(json!({ "booking": record })))
        }
        Err(err) => {
            state.flows.lock().await.insert(id, flow);
            Err(err.into())
        }
    }
}
