use chrono::NaiveDateTime;

/// Half-open time interval `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
	start: NaiveDateTime,
	end: NaiveDateTime,
}

impl Interval {
	/// Returns `None` unless `start < end`.
	pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
		(start < end).then_some(Self { start, end })
	}

	pub fn start(&self) -> NaiveDateTime {
		self.start
	}

	pub fn end(&self) -> NaiveDateTime {
		self.end
	}

	/// An existing interval conflicts with a proposed one if it starts inside it, ends inside it
	/// or fully contains it. This is the same as the usual half-open overlap test, so intervals
	/// that merely touch (`self.end == other.start`) do not overlap.
	pub fn overlaps(&self, other: &Interval) -> bool {
		self.start < other.end && other.start < self.end
	}
}
