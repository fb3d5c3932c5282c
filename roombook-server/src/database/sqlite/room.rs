use super::{SqliteRepository, sqlite_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::{Room, RoomId};
use crate::room::repository::RoomRepository;
use async_trait::async_trait;
use sqlx::{query, query_as};

#[async_trait]
impl RoomRepository for SqliteRepository {
	async fn get(&self, connection: &mut dyn Connection, room_id: RoomId) -> Result<Option<Room>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT id, name, capacity, description, created_at
			FROM room
			WHERE id = ?1",
		)
		.bind(room_id)
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}

	async fn get_by_name(&self, connection: &mut dyn Connection, name: &str) -> Result<Option<Room>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT id, name, capacity, description, created_at
			FROM room
			WHERE name = ?1",
		)
		.bind(name)
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}

	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Room>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT id, name, capacity, description, created_at
			FROM room
			ORDER BY id ASC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn create(
		&self,
		connection: &mut dyn Connection,
		name: &str,
		capacity: u32,
		description: &str,
	) -> Result<Room, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"INSERT INTO room(name, capacity, description) VALUES (?1, ?2, ?3)
			RETURNING
				id,
				name,
				capacity,
				description,
				created_at",
		)
		.bind(name)
		.bind(capacity)
		.bind(description)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}

	async fn remove_by_name(&self, connection: &mut dyn Connection, name: &str) -> Result<bool, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		let result = query(r"DELETE FROM room WHERE name = ?1")
			.bind(name)
			.execute(connection)
			.await?;
		Ok(result.rows_affected() > 0)
	}
}
