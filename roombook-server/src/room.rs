use crate::database::error::DatabaseError;
use crate::database::{Connection, Repository};
use crate::reservation::model::RoomWithReservations;
use crate::room::model::Room;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

pub mod model;
pub mod repository;

#[derive(Clone)]
pub struct RoomService {
	repository: Arc<dyn Repository>,
}

/// Input for [`RoomService::create_room`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewRoom {
	pub name: String,
	pub capacity: u32,
	pub description: String,
}

#[derive(Error, Debug)]
pub enum RoomCreationError {
	#[error("A room with the name '{0}' already exists.")]
	DuplicateName(String),
	#[error("Room could not be saved: {0}")]
	InvalidInput(#[source] DatabaseError),
}

#[derive(Error, Debug)]
pub enum RoomLookupError {
	#[error("No room with the name '{0}' exists.")]
	NotFound(String),
	#[error(transparent)]
	Database(#[from] DatabaseError),
}

impl RoomService {
	pub fn new(repository: Arc<dyn Repository>) -> Self {
		Self { repository }
	}

	pub async fn create_room(
		&self,
		connection: &mut dyn Connection,
		new_room: &NewRoom,
	) -> Result<RoomWithReservations, RoomCreationError> {
		let NewRoom {
			name,
			capacity,
			description,
		} = new_room;
		debug!(name, "Adding room");

		let room = self
			.repository
			.room()
			.create(connection, name, *capacity, description)
			.await
			.map_err(|error| match error {
				DatabaseError::UniqueViolation(_) => RoomCreationError::DuplicateName(name.clone()),
				error => RoomCreationError::InvalidInput(error),
			})
			.inspect_err(|error| warn!(name, "Failed to add room: {error}"))?;

		debug!(name, id = %room.id, "Added room");
		Ok(RoomWithReservations {
			room,
			reservations: Vec::new(),
		})
	}

	pub async fn list_rooms(&self, connection: &mut dyn Connection) -> Result<Vec<Room>, DatabaseError> {
		debug!("Listing rooms");
		let rooms = self.repository.room().list(connection).await?;
		debug!(count = rooms.len(), "Found rooms");

		Ok(rooms)
	}

	pub async fn find_room_by_name(
		&self,
		connection: &mut dyn Connection,
		name: &str,
	) -> Result<RoomWithReservations, RoomLookupError> {
		debug!(name, "Looking up room");
		let Some(room) = self.repository.room().get_by_name(connection, name).await? else {
			warn!(name, "Room not found");
			return Err(RoomLookupError::NotFound(name.to_owned()));
		};

		let reservations = self.repository.reservation().list_for_room(connection, room.id).await?;
		debug!(name, id = %room.id, reservations = reservations.len(), "Found room");

		Ok(RoomWithReservations { room, reservations })
	}

	/// Reservations of the room are deleted along with it.
	pub async fn delete_room_by_name(&self, connection: &mut dyn Connection, name: &str) -> Result<(), RoomLookupError> {
		debug!(name, "Deleting room");
		if !self.repository.room().remove_by_name(connection, name).await? {
			warn!(name, "Room to delete not found");
			return Err(RoomLookupError::NotFound(name.to_owned()));
		}

		debug!(name, "Deleted room");
		Ok(())
	}
}
