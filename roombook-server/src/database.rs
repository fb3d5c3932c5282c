use crate::database::error::DatabaseError;
use crate::database::transaction::Transaction;
use crate::reservation::repository::ReservationRepository;
use crate::room::repository::RoomRepository;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;
use std::any::{Any, type_name};

pub mod sqlite;

pub mod error;
pub mod transaction;

#[async_trait]
pub trait Database: Send + Sync {
	async fn migrate(&mut self) -> Result<(), DatabaseError>;

	/// Hands out a connection for the duration of a single request.
	/// Dropping it returns it to the pool.
	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError>;
}

assert_obj_safe!(Database);

#[async_trait]
pub trait Connection: Any + Send + Sync {
	fn type_name(&self) -> &'static str {
		type_name::<Self>()
	}

	/// Dropping the returned transaction without committing rolls it back.
	async fn begin_transaction<'connection>(
		&'connection mut self,
	) -> Result<Box<dyn Transaction + 'connection>, DatabaseError>;
}

assert_obj_safe!(Connection);

pub trait Repository: RoomRepository + ReservationRepository + Send + Sync + 'static {
	fn room(&self) -> &dyn RoomRepository;
	fn reservation(&self) -> &dyn ReservationRepository;
}

assert_obj_safe!(Repository);
