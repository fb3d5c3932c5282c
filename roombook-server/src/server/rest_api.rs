use crate::context::ApplicationContext;
use crate::database::Database;
use crate::reservation::ReservationService;
use crate::room::{RoomCreationError, RoomService};
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::extract::{Form, Query};
use crate::server::rest_api::models::{
	ReservationCreationRequest, ReservationListResponse, RoomCreationRequest, RoomDeletionResponse, RoomListResponse,
	RoomNameQuery, RoomResponse,
};
use aide::axum::ApiRouter;
use aide::axum::routing::{get_with, post_with};
use aide::transform::TransformOperation;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

pub mod error;
mod extract;
pub mod models;

const ROOM_TAG: &str = "Salas";
const RESERVATION_TAG: &str = "Reserva";

pub fn rest_api() -> ApiRouter<ApplicationContext> {
	ApiRouter::new()
		.api_route(
			"/sala",
			post_with(create_room, create_room_docs)
				.get_with(find_room, find_room_docs)
				.delete_with(delete_room, delete_room_docs),
		)
		.api_route("/salas", get_with(list_rooms, list_rooms_docs))
		.api_route("/reserva", post_with(create_reservation, create_reservation_docs))
		.api_route("/reservas", get_with(list_reservations, list_reservations_docs))
}

async fn create_room(
	State(database): State<Arc<dyn Database>>,
	State(room_service): State<RoomService>,
	Form(request): Form<RoomCreationRequest>,
) -> Result<Json<RoomResponse>, ApiErrorResponse> {
	let mut connection = database
		.connection()
		.await
		.map_err(RoomCreationError::InvalidInput)?;
	let room = room_service.create_room(&mut *connection, &request.into()).await?;

	Ok(Json(room.into()))
}

fn create_room_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.tag(ROOM_TAG)
		.summary("Adiciona uma nova sala à base de dados.")
		.response::<409, ApiErrorResponse>()
		.response::<400, ApiErrorResponse>()
}

async fn list_rooms(
	State(database): State<Arc<dyn Database>>,
	State(room_service): State<RoomService>,
) -> Result<Json<RoomListResponse>, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	let rooms = room_service.list_rooms(&mut *connection).await?;

	Ok(Json(rooms.into()))
}

fn list_rooms_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.tag(ROOM_TAG)
		.summary("Faz a busca por todas as salas cadastradas.")
}

async fn find_room(
	State(database): State<Arc<dyn Database>>,
	State(room_service): State<RoomService>,
	Query(RoomNameQuery { name }): Query<RoomNameQuery>,
) -> Result<Json<RoomResponse>, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	let room = room_service.find_room_by_name(&mut *connection, &name).await?;

	Ok(Json(room.into()))
}

fn find_room_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.tag(ROOM_TAG)
		.summary("Faz a busca por uma sala a partir do nome.")
		.response::<404, ApiErrorResponse>()
}

async fn delete_room(
	State(database): State<Arc<dyn Database>>,
	State(room_service): State<RoomService>,
	Query(RoomNameQuery { name }): Query<RoomNameQuery>,
) -> Result<Json<RoomDeletionResponse>, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	room_service.delete_room_by_name(&mut *connection, &name).await?;

	Ok(Json(RoomDeletionResponse {
		message: "Sala removida".to_owned(),
		name,
	}))
}

fn delete_room_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.tag(ROOM_TAG)
		.summary("Remove uma sala e suas reservas a partir do nome.")
		.response::<404, ApiErrorResponse>()
}

async fn create_reservation(
	State(database): State<Arc<dyn Database>>,
	State(reservation_service): State<ReservationService>,
	Form(request): Form<ReservationCreationRequest>,
) -> Result<Json<RoomResponse>, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	let room = reservation_service
		.create_reservation(&mut *connection, &request.into())
		.await?;

	Ok(Json(room.into()))
}

fn create_reservation_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.tag(RESERVATION_TAG)
		.summary("Adiciona uma nova reserva a uma sala identificada pelo id.")
		.response::<400, ApiErrorResponse>()
		.response::<404, ApiErrorResponse>()
		.response::<409, ApiErrorResponse>()
}

async fn list_reservations(
	State(database): State<Arc<dyn Database>>,
	State(reservation_service): State<ReservationService>,
) -> Result<Json<ReservationListResponse>, ApiErrorResponse> {
	let mut connection = database.connection().await?;
	let reservations = reservation_service.list_reservations(&mut *connection).await?;

	Ok(Json(reservations.into()))
}

fn list_reservations_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.tag(RESERVATION_TAG)
		.summary("Faz a busca por todas as reservas cadastradas.")
}
