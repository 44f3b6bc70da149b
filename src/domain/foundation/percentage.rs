//! Percentage value object with one decimal place (0.0-100.0).

use serde::{Serialize, Serializer};
use std::fmt;

/// A share between 0.0% and 100.0%, stored as tenths of a percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u16);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Share of `count` in `total`, rounded half-up to one decimal place.
    ///
    /// A zero `total` yields 0.0%.
    pub fn of(count: u32, total: u32) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let count = u64::from(count.min(total));
        let total = u64::from(total);
        let tenths = (count * 2000 + total) / (2 * total);
        Self(tenths as u16)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}%", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
