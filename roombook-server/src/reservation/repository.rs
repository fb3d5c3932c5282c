use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::reservation::interval::Interval;
use crate::reservation::model::Reservation;
use crate::room::model::RoomId;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait ReservationRepository: Send + Sync + 'static {
	/// Fails with [`DatabaseError::ForeignKeyViolation`] if the room doesn't exist and with
	/// [`DatabaseError::TriggerViolation`] if the interval overlaps another reservation of the room.
	async fn create(
		&self,
		connection: &mut dyn Connection,
		room_id: RoomId,
		interval: Interval,
	) -> Result<Reservation, DatabaseError>;
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Reservation>, DatabaseError>;
	async fn list_for_room(
		&self,
		connection: &mut dyn Connection,
		room_id: RoomId,
	) -> Result<Vec<Reservation>, DatabaseError>;

	/// Any reservation of the room whose interval overlaps the given one.
	async fn find_conflicting(
		&self,
		connection: &mut dyn Connection,
		room_id: RoomId,
		interval: Interval,
	) -> Result<Option<Reservation>, DatabaseError>;
}

assert_obj_safe!(ReservationRepository);
