use crate::reservation::model::{Reservation, ReservationId, RoomWithReservations};
use crate::reservation::request::ReservationRequest;
use crate::room::NewRoom;
use crate::room::model::{Room, RoomId};
use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, JsonSchema)]
pub struct RoomCreationRequest {
	#[serde(rename = "nome")]
	pub name: String,
	#[serde(rename = "capacidade")]
	pub capacity: u32,
	#[serde(rename = "descricao")]
	pub description: String,
}

impl From<RoomCreationRequest> for NewRoom {
	fn from(
		RoomCreationRequest {
			name,
			capacity,
			description,
		}: RoomCreationRequest,
	) -> Self {
		Self {
			name,
			capacity,
			description,
		}
	}
}

#[derive(Deserialize, JsonSchema)]
pub struct RoomNameQuery {
	#[serde(rename = "nome")]
	pub name: String,
}

/// Form body of a reservation, date as `DD/MM/YYYY`, time as `HH:MM` and duration in whole hours.
#[derive(Deserialize, JsonSchema)]
pub struct ReservationCreationRequest {
	#[serde(rename = "sala_id")]
	pub room_id: RoomId,
	#[serde(rename = "data_reserva")]
	pub date: String,
	#[serde(rename = "horario_reserva")]
	pub time: String,
	#[serde(rename = "duracao_reserva")]
	pub duration_hours: u32,
}

impl From<ReservationCreationRequest> for ReservationRequest {
	fn from(
		ReservationCreationRequest {
			room_id,
			date,
			time,
			duration_hours,
		}: ReservationCreationRequest,
	) -> Self {
		Self {
			room_id,
			date,
			time,
			duration_hours,
		}
	}
}

#[derive(Serialize, JsonSchema)]
pub struct RoomResponse {
	pub id: RoomId,
	#[serde(rename = "nome")]
	pub name: String,
	#[serde(rename = "capacidade")]
	pub capacity: u32,
	#[serde(rename = "descricao")]
	pub description: String,
	#[serde(rename = "total_reservas")]
	pub reservation_count: usize,
	#[serde(rename = "reservas")]
	pub reservations: Vec<RoomReservationResponse>,
}

impl From<RoomWithReservations> for RoomResponse {
	fn from(RoomWithReservations { room, reservations }: RoomWithReservations) -> Self {
		Self {
			id: room.id,
			name: room.name,
			capacity: room.capacity,
			description: room.description,
			reservation_count: reservations.len(),
			reservations: reservations.into_iter().map(RoomReservationResponse::from).collect(),
		}
	}
}

#[derive(Serialize, JsonSchema)]
pub struct RoomReservationResponse {
	pub id: ReservationId,
	#[serde(rename = "inicio_reserva")]
	#[schemars(with = "String")]
	pub start: NaiveDateTime,
	#[serde(rename = "fim_reserva")]
	#[schemars(with = "String")]
	pub end: NaiveDateTime,
}

impl From<Reservation> for RoomReservationResponse {
	fn from(reservation: Reservation) -> Self {
		Self {
			id: reservation.id,
			start: reservation.start_at,
			end: reservation.end_at,
		}
	}
}

#[derive(Serialize, JsonSchema)]
pub struct RoomListResponse {
	#[serde(rename = "salas")]
	pub rooms: Vec<RoomSummaryResponse>,
}

#[derive(Serialize, JsonSchema)]
pub struct RoomSummaryResponse {
	#[serde(rename = "nome")]
	pub name: String,
	#[serde(rename = "capacidade")]
	pub capacity: u32,
	#[serde(rename = "descricao")]
	pub description: String,
}

impl From<Vec<Room>> for RoomListResponse {
	fn from(rooms: Vec<Room>) -> Self {
		let rooms = rooms
			.into_iter()
			.map(|room| RoomSummaryResponse {
				name: room.name,
				capacity: room.capacity,
				description: room.description,
			})
			.collect();
		Self { rooms }
	}
}

#[derive(Serialize, JsonSchema)]
pub struct ReservationListResponse {
	#[serde(rename = "reservas")]
	pub reservations: Vec<ReservationResponse>,
}

#[derive(Serialize, JsonSchema)]
pub struct ReservationResponse {
	#[serde(rename = "sala_id")]
	pub room_id: RoomId,
	#[serde(rename = "inicio_reserva")]
	#[schemars(with = "String")]
	pub start: NaiveDateTime,
	#[serde(rename = "fim_reserva")]
	#[schemars(with = "String")]
	pub end: NaiveDateTime,
}

impl From<Vec<Reservation>> for ReservationListResponse {
	fn from(reservations: Vec<Reservation>) -> Self {
		let reservations = reservations
			.into_iter()
			.map(|reservation| ReservationResponse {
				room_id: reservation.room_id,
				start: reservation.start_at,
				end: reservation.end_at,
			})
			.collect();
		Self { reservations }
	}
}

#[derive(Serialize, JsonSchema)]
pub struct RoomDeletionResponse {
	pub message: String,
	#[serde(rename = "nome")]
	pub name: String,
}
