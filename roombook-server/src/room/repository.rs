use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::{Room, RoomId};
use async_trait::async_trait;
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait RoomRepository: Send + Sync + 'static {
	async fn get(&self, connection: &mut dyn Connection, room_id: RoomId) -> Result<Option<Room>, DatabaseError>;
	async fn get_by_name(&self, connection: &mut dyn Connection, name: &str) -> Result<Option<Room>, DatabaseError>;
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Room>, DatabaseError>;

	/// Fails with [`DatabaseError::UniqueViolation`] if a room with the same name exists.
	async fn create(
		&self,
		connection: &mut dyn Connection,
		name: &str,
		capacity: u32,
		description: &str,
	) -> Result<Room, DatabaseError>;

	/// Removes the room together with all of its reservations.
	/// Returns whether a room with that name existed.
	async fn remove_by_name(&self, connection: &mut dyn Connection, name: &str) -> Result<bool, DatabaseError>;
}

assert_obj_safe!(RoomRepository);
