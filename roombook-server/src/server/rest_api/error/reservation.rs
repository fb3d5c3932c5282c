use crate::reservation::ReservationError;
use crate::server::rest_api::error::{ApiErrorResponse, ROOM_NOT_FOUND};
use axum::http::StatusCode;

impl From<ReservationError> for ApiErrorResponse {
	fn from(error: ReservationError) -> Self {
		use ReservationError::*;
		match error {
			InvalidInput(_) => ApiErrorResponse::new(
				StatusCode::BAD_REQUEST,
				"Data, horário ou duração da reserva inválidos :/",
			),
			RoomNotFound(_) => ApiErrorResponse::new(StatusCode::NOT_FOUND, ROOM_NOT_FOUND),
			ReservationConflict(_) => ApiErrorResponse::new(
				StatusCode::CONFLICT,
				"Já existe uma reserva para essa sala no mesmo período.",
			),
			Database(error) => error.into(),
		}
	}
}
