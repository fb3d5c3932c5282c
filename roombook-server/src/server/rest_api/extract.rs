use crate::server::rest_api::error::ApiErrorResponse;
use aide::OperationInput;
use aide::generate::GenContext;
use aide::openapi::Operation;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use schemars::JsonSchema;
use tracing::warn;

const INVALID_REQUEST: &str = "Dados da requisição inválidos :/";

/// [`axum::Form`] that rejects malformed bodies with an [`ApiErrorResponse`].
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(ApiErrorResponse))]
pub struct Form<T>(pub T);

/// [`axum::extract::Query`] that rejects malformed query strings with an [`ApiErrorResponse`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiErrorResponse))]
pub struct Query<T>(pub T);

impl From<FormRejection> for ApiErrorResponse {
	fn from(rejection: FormRejection) -> Self {
		warn!("Rejected form body: {rejection}");
		ApiErrorResponse::new(StatusCode::BAD_REQUEST, INVALID_REQUEST)
	}
}

impl From<QueryRejection> for ApiErrorResponse {
	fn from(rejection: QueryRejection) -> Self {
		warn!("Rejected query string: {rejection}");
		ApiErrorResponse::new(StatusCode::BAD_REQUEST, INVALID_REQUEST)
	}
}

impl<T: JsonSchema> OperationInput for Form<T> {
	fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
		axum::Form::<T>::operation_input(ctx, operation);
	}
}

impl<T: JsonSchema> OperationInput for Query<T> {
	fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
		axum::extract::Query::<T>::operation_input(ctx, operation);
	}
}
