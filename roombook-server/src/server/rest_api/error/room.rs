use crate::room::{RoomCreationError, RoomLookupError};
use crate::server::rest_api::error::{ApiErrorResponse, ROOM_NOT_FOUND};
use axum::http::StatusCode;

impl From<RoomCreationError> for ApiErrorResponse {
	fn from(error: RoomCreationError) -> Self {
		use RoomCreationError::*;
		match error {
			DuplicateName(_) => ApiErrorResponse::new(StatusCode::CONFLICT, "Sala de mesmo nome já salva na base :/"),
			InvalidInput(_) => ApiErrorResponse::new(StatusCode::BAD_REQUEST, "Não foi possível salvar novo item :/"),
		}
	}
}

impl From<RoomLookupError> for ApiErrorResponse {
	fn from(error: RoomLookupError) -> Self {
		match error {
			RoomLookupError::NotFound(_) => ApiErrorResponse::new(StatusCode::NOT_FOUND, ROOM_NOT_FOUND),
			RoomLookupError::Database(error) => error.into(),
		}
	}
}
