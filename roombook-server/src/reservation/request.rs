use crate::reservation::interval::Interval;
use crate::room::model::RoomId;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::ops::RangeInclusive;
use thiserror::Error;

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M";
/// Years with four digits keep the stored `YYYY-MM-DD HH:MM:SS` text in chronological order.
const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// A reservation as it is requested: calendar date, time of day and a whole number of hours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationRequest {
	pub room_id: RoomId,
	/// `DD/MM/YYYY`
	pub date: String,
	/// 24-hour `HH:MM`
	pub time: String,
	pub duration_hours: u32,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidReservationRequest {
	#[error("Reservation date '{0}' is not formatted as DD/MM/YYYY.")]
	Date(String),
	#[error("Reservation time '{0}' is not formatted as HH:MM.")]
	Time(String),
	#[error("Reservation duration of {0} hours does not yield a valid end.")]
	Duration(u32),
	#[error("Reservation from {0} to {1} is outside of the years 1 to 9999.")]
	OutOfRange(NaiveDateTime, NaiveDateTime),
}

impl ReservationRequest {
	/// Combines date and time into the start and adds the duration to get the end.
	pub fn interval(&self) -> Result<Interval, InvalidReservationRequest> {
		let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
			.map_err(|_| InvalidReservationRequest::Date(self.date.clone()))?;
		let time = NaiveTime::parse_from_str(self.time.trim(), TIME_FORMAT)
			.map_err(|_| InvalidReservationRequest::Time(self.time.clone()))?;
		let start = date.and_time(time);

		let interval = TimeDelta::try_hours(i64::from(self.duration_hours))
			.and_then(|duration| start.checked_add_signed(duration))
			.and_then(|end| Interval::new(start, end))
			.ok_or(InvalidReservationRequest::Duration(self.duration_hours))?;

		if !SUPPORTED_YEARS.contains(&interval.start().year()) || !SUPPORTED_YEARS.contains(&interval.end().year()) {
			return Err(InvalidReservationRequest::OutOfRange(interval.start(), interval.end()));
		}
		Ok(interval)
	}
}
