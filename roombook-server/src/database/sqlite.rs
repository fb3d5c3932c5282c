use crate::database::error::{DatabaseError, IntoDatabaseResult};
use crate::database::transaction::Transaction;
use crate::database::{Connection, Database, Repository};
use crate::reservation::repository::ReservationRepository;
use crate::room::repository::RoomRepository;
use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, migrate};
use std::any::Any;
use std::ops::DerefMut;

mod reservation;
mod room;
#[cfg(test)]
pub mod test_utils;

/// Takes the write lock up front, so concurrent writers wait for the busy timeout
/// instead of failing when upgrading a read lock.
const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

#[derive(Clone)]
pub struct SqliteDatabase {
	pool: SqlitePool,
}

impl SqliteDatabase {
	pub async fn connect(database_url: &str) -> Result<Self, DatabaseError> {
		let pool = SqlitePool::connect(database_url)
			.await
			.connection_error("Failed to connect to database")?;
		let database = Self { pool };

		Ok(database)
	}
}

#[async_trait]
impl Database for SqliteDatabase {
	async fn migrate(&mut self) -> Result<(), DatabaseError> {
		migrate!().run(&self.pool).await.map_err(Into::into)
	}

	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError> {
		self.pool
			.acquire()
			.await
			.map(|connection| Box::new(connection) as Box<dyn Connection>)
			.map_err(Into::into)
	}
}

#[async_trait]
impl Connection for SqliteConnection {
	async fn begin_transaction<'connection>(
		&'connection mut self,
	) -> Result<Box<dyn Transaction + 'connection>, DatabaseError> {
		let transaction = sqlx::Connection::begin_with(self, BEGIN_IMMEDIATE).await?;
		Ok(Box::new(transaction))
	}
}

#[async_trait]
impl Connection for PoolConnection<Sqlite> {
	async fn begin_transaction<'connection>(
		&'connection mut self,
	) -> Result<Box<dyn Transaction + 'connection>, DatabaseError> {
		let transaction = sqlx::Connection::begin_with(self.deref_mut(), BEGIN_IMMEDIATE).await?;
		Ok(Box::new(transaction))
	}
}

#[async_trait]
impl<'connection> Transaction for sqlx::Transaction<'connection, Sqlite> {
	fn connection(&mut self) -> &mut dyn Connection {
		let connection: &mut SqliteConnection = self;
		connection
	}

	async fn commit(self: Box<Self>) -> Result<(), DatabaseError> {
		sqlx::Transaction::commit(*self).await.map_err(Into::into)
	}

	async fn rollback(self: Box<Self>) -> Result<(), DatabaseError> {
		sqlx::Transaction::rollback(*self).await.map_err(Into::into)
	}
}

#[derive(Default, Clone, Copy)]
pub struct SqliteRepository;

impl Repository for SqliteRepository {
	fn room(&self) -> &dyn RoomRepository {
		self
	}

	fn reservation(&self) -> &dyn ReservationRepository {
		self
	}
}

fn sqlite_connection(connection: &mut dyn Connection) -> Result<&mut SqliteConnection, DatabaseError> {
	let type_name = connection.type_name();

	let connection: &mut dyn Any = connection;

	if connection.is::<PoolConnection<Sqlite>>() {
		return connection
			.downcast_mut::<PoolConnection<Sqlite>>()
			.map(DerefMut::deref_mut)
			.ok_or_else(|| DatabaseError::DatabaseMismatch(anyhow!("Failed to downcast {type_name}")));
	}

	connection
		.downcast_mut::<SqliteConnection>()
		.ok_or_else(|| DatabaseError::DatabaseMismatch(anyhow!("Expected SQLite connection, got {type_name}")))
}
