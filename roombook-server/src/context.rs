use crate::configuration::Configuration;
use crate::database::error::DatabaseError;
use crate::database::sqlite::{SqliteDatabase, SqliteRepository};
use crate::database::{Database, Repository};
use crate::reservation::ReservationService;
use crate::room::RoomService;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub database: Arc<dyn Database>,
	pub room_service: RoomService,
	pub reservation_service: ReservationService,
}

impl ApplicationContext {
	/// Connects to and migrates the configured database.
	pub async fn new(configuration: Configuration) -> Result<ApplicationContext, DatabaseError> {
		let mut database = SqliteDatabase::connect(&configuration.database_url).await?;
		database.migrate().await?;

		Ok(Self::with_database(configuration, Arc::new(database), Arc::new(SqliteRepository)))
	}

	pub fn with_database(
		configuration: Configuration,
		database: Arc<dyn Database>,
		repository: Arc<dyn Repository>,
	) -> ApplicationContext {
		Self {
			configuration,
			database,
			room_service: RoomService::new(repository.clone()),
			reservation_service: ReservationService::new(repository),
		}
	}
}
