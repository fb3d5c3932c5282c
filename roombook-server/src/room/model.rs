use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(
	derive_more::From,
	derive_more::Into,
	derive_more::Display,
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
	JsonSchema,
	sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct RoomId(i64);

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Room {
	pub id: RoomId,
	pub name: String,
	pub capacity: u32,
	pub description: String,
	pub created_at: NaiveDateTime,
}
