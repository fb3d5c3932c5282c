use crate::database::error::DatabaseError;
use crate::database::transaction::Transaction;
use crate::database::{Connection, Repository};
use crate::reservation::interval::Interval;
use crate::reservation::model::{Reservation, RoomWithReservations};
use crate::reservation::request::{InvalidReservationRequest, ReservationRequest};
use crate::room::model::RoomId;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

pub mod interval;
pub mod model;
pub mod repository;
pub mod request;

#[derive(Clone)]
pub struct ReservationService {
	repository: Arc<dyn Repository>,
}

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ReservationError {
	#[error("Invalid reservation: {0}")]
	InvalidInput(#[from] InvalidReservationRequest),
	#[error("No room with the id {0} exists.")]
	RoomNotFound(RoomId),
	#[error("The room {0} is already reserved during the requested period.")]
	ReservationConflict(RoomId),
	#[error(transparent)]
	Database(#[from] DatabaseError),
}

impl ReservationService {
	pub fn new(repository: Arc<dyn Repository>) -> Self {
		Self { repository }
	}

	/// Whether any existing reservation of the room overlaps the interval.
	/// The room is expected to exist.
	pub async fn has_conflict(
		&self,
		connection: &mut dyn Connection,
		room_id: RoomId,
		interval: Interval,
	) -> Result<bool, DatabaseError> {
		let conflict = self
			.repository
			.reservation()
			.find_conflicting(connection, room_id, interval)
			.await?
			.filter(|reservation| {
				Interval::new(reservation.start_at, reservation.end_at)
					.is_some_and(|existing| existing.overlaps(&interval))
			});
		if let Some(conflict) = &conflict {
			debug!(room_id = %room_id, conflicting_id = %conflict.id, "Found conflicting reservation");
		}

		Ok(conflict.is_some())
	}

	/// Room lookup, conflict check and insert share one transaction that is only committed on success.
	pub async fn create_reservation(
		&self,
		connection: &mut dyn Connection,
		request: &ReservationRequest,
	) -> Result<RoomWithReservations, ReservationError> {
		let room_id = request.room_id;
		debug!(room_id = %room_id, "Adding reservation");

		let interval = request
			.interval()
			.inspect_err(|error| warn!(room_id = %room_id, "Failed to add reservation: {error}"))?;

		let mut transaction = connection.begin_transaction().await?;

		let Some(room) = self.repository.room().get(transaction.connection(), room_id).await? else {
			warn!(room_id = %room_id, "Failed to add reservation: room not found");
			rollback(transaction).await;
			return Err(ReservationError::RoomNotFound(room_id));
		};

		if self.has_conflict(transaction.connection(), room_id, interval).await? {
			warn!(room_id = %room_id, "Failed to add reservation: period already reserved");
			rollback(transaction).await;
			return Err(ReservationError::ReservationConflict(room_id));
		}

		let reservation = self
			.repository
			.reservation()
			.create(transaction.connection(), room_id, interval)
			.await
			.map_err(|error| match error {
				DatabaseError::TriggerViolation(_) => ReservationError::ReservationConflict(room_id),
				DatabaseError::ForeignKeyViolation(_) => ReservationError::RoomNotFound(room_id),
				error => ReservationError::Database(error),
			})?;
		let reservations = self
			.repository
			.reservation()
			.list_for_room(transaction.connection(), room_id)
			.await?;

		transaction.commit().await?;

		debug!(room_id = %room_id, id = %reservation.id, "Added reservation");
		Ok(RoomWithReservations { room, reservations })
	}

	pub async fn list_reservations(&self, connection: &mut dyn Connection) -> Result<Vec<Reservation>, DatabaseError> {
		debug!("Listing reservations");
		let reservations = self.repository.reservation().list(connection).await?;
		debug!(count = reservations.len(), "Found reservations");

		Ok(reservations)
	}
}

/// A failed rollback is logged, the rejection is still returned to the caller.
async fn rollback(transaction: Box<dyn Transaction + '_>) {
	if let Err(error) = transaction.rollback().await {
		warn!("Failed to roll back rejected reservation: {error}");
	}
}
