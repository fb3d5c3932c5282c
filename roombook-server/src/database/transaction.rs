use crate::database::Connection;
use crate::database::error::DatabaseError;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;

#[async_trait]
pub trait Transaction: Send {
	/// The connection all statements of this transaction have to run on.
	fn connection(&mut self) -> &mut dyn Connection;

	async fn commit(self: Box<Self>) -> Result<(), DatabaseError>;
	async fn rollback(self: Box<Self>) -> Result<(), DatabaseError>;
}

assert_obj_safe!(Transaction);
