//! Resolved time-of-day windows.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BinError, BinResult};

/// A half-open `[start, end)` window within a single day.
///
/// Built from the four optional hour/minute fields on
/// [`BinOptions`](crate::types::BinOptions) by one of two resolution
/// policies: *required* (every field must be present) or *defaulted*
/// (`00:00`-`11:59` fill in for missing fields). Which policy applies is a
/// per-granularity property of the generator, not of the window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeOfDayWindow {
    /// Creates a window from resolved start and end times.
    #[must_use]
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Creates a window from hour/minute fields.
    ///
    /// # Errors
    ///
    /// Returns `BinError::InvalidTimeOfDay` if a field is out of range.
    pub fn from_fields(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> BinResult<Self> {
        let start = NaiveTime::from_hms_opt(start_hour, start_minute, 0)
            .ok_or_else(|| BinError::invalid_time_of_day(start_hour, start_minute))?;
        let end = NaiveTime::from_hms_opt(end_hour, end_minute, 0)
            .ok_or_else(|| BinError::invalid_time_of_day(end_hour, end_minute))?;
        Ok(Self { start, end })
    }

    /// Returns the window start time.
    #[must_use]
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Returns the window end time.
    #[must_use]
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Returns true if `t` falls inside the half-open window.
    #[must_use]
    pub fn contains(&self, t: NaiveTime) -> bool {
        t >= self.start && t < self.end
    }
}

impl fmt::Display for TimeOfDayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}
