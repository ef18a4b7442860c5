use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use ridelane_core::BookingError;

#[derive(Debug)]
pub enum AppError {
    Booking(BookingError),
    Internal(anyhow::Error),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        Self::Booking(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Booking(err) => match &err {
                BookingError::InvalidSeat(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                BookingError::SeatUnavailable(_) => (StatusCode::CONFLICT, err.to_string()),
                BookingError::ValidationIncomplete(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
                }
                BookingError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                BookingError::InvalidTransition { .. } => (StatusCode::CONFLICT, err.to_string()),
                BookingError::PaymentFailed(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
                BookingError::StorageUnavailable(_) => {
                    tracing::error!("Storage failure: {}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal Server Error".to_string(),
                    )
                }
            },
            AppError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
