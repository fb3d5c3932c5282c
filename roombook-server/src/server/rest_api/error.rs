use aide::OperationOutput;
use aide::generate::GenContext;
use aide::openapi::Operation;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Serialize;

mod database;
mod reservation;
mod room;

pub const ROOM_NOT_FOUND: &str = "Sala não encontrada na base :/";

/// Error body returned by every endpoint: `{"message": "..."}`.
///
/// The message is meant for humans and never contains internal details.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiErrorResponse {
	#[serde(skip)]
	status: u16,
	message: String,
}

impl ApiErrorResponse {
	pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self {
			status: status.as_u16(),
			message: message.into(),
		}
	}
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> Response {
		let status_code = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		(status_code, Json(self)).into_response()
	}
}

impl OperationOutput for ApiErrorResponse {
	type Inner = Self;

	fn operation_response(ctx: &mut GenContext, operation: &mut Operation) -> Option<aide::openapi::Response> {
		Json::<Self>::operation_response(ctx, operation)
	}
}
