use crate::database::error::DatabaseError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use tracing::error;

impl From<DatabaseError> for ApiErrorResponse {
	fn from(error: DatabaseError) -> Self {
		error!("Unexpected database error: {error}");
		ApiErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Erro interno ao acessar a base :/")
	}
}
