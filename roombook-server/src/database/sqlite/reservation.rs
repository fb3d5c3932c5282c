use super::{SqliteRepository, sqlite_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::reservation::interval::Interval;
use crate::reservation::model::Reservation;
use crate::reservation::repository::ReservationRepository;
use crate::room::model::RoomId;
use async_trait::async_trait;
use sqlx::query_as;

#[async_trait]
impl ReservationRepository for SqliteRepository {
	async fn create(
		&self,
		connection: &mut dyn Connection,
		room_id: RoomId,
		interval: Interval,
	) -> Result<Reservation, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"INSERT INTO reservation(room_id, start_at, end_at) VALUES (?1, ?2, ?3)
			RETURNING
				id,
				room_id,
				start_at,
				end_at",
		)
		.bind(room_id)
		.bind(interval.start())
		.bind(interval.end())
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}

	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Reservation>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT id, room_id, start_at, end_at
			FROM reservation
			ORDER BY id ASC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn list_for_room(
		&self,
		connection: &mut dyn Connection,
		room_id: RoomId,
	) -> Result<Vec<Reservation>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT id, room_id, start_at, end_at
			FROM reservation
			WHERE room_id = ?1
			ORDER BY start_at ASC, id ASC",
		)
		.bind(room_id)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn find_conflicting(
		&self,
		connection: &mut dyn Connection,
		room_id: RoomId,
		interval: Interval,
	) -> Result<Option<Reservation>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT id, room_id, start_at, end_at
			FROM reservation
			WHERE room_id = ?1
				AND (
					(start_at >= ?2 AND start_at < ?3)
					OR (end_at > ?2 AND end_at <= ?3)
					OR (start_at <= ?2 AND end_at >= ?3)
				)
			LIMIT 1",
		)
		.bind(room_id)
		.bind(interval.start())
		.bind(interval.end())
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}
}
