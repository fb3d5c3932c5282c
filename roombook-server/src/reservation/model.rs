use crate::room::model::{Room, RoomId};
use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::Serialize;
use sqlx::FromRow;

#[derive(
	derive_more::From,
	derive_more::Into,
	derive_more::Display,
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	JsonSchema,
	sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ReservationId(i64);

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Reservation {
	pub id: ReservationId,
	pub room_id: RoomId,
	pub start_at: NaiveDateTime,
	pub end_at: NaiveDateTime,
}

/// A room together with all of its reservations, ordered by their start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomWithReservations {
	pub room: Room,
	pub reservations: Vec<Reservation>,
}
