//! Timestamp value object for immutable points in time.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// The instant `age` before this one, saturating at the earliest representable time.
    pub fn earlier_by(&self, age: std::time::Duration) -> Timestamp {
        chrono::Duration::from_std(age)
            .ok()
            .and_then(|delta| self.0.checked_sub_signed(delta))
            .map(Self)
            .unwrap_or(Self(DateTime::<Utc>::MIN_UTC))
    }

    /// Wall-clock time in the given zone, or in the host's local zone when `None`.
    pub fn wall_clock(&self, offset: Option<FixedOffset>) -> NaiveDateTime {
        match offset {
            Some(offset) => self.0.with_timezone(&offset).naive_local(),
            None => self.0.with_timezone(&Local).naive_local(),
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
