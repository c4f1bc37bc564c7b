//! Bin request configuration.

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{BinError, BinResult};
use crate::types::{Granularity, TimeOfDayWindow};

/// Default window start when a field is missing in a defaulted path.
const DEFAULT_START: (u32, u32) = (0, 0);
/// Default window end when a field is missing in a defaulted path.
const DEFAULT_END: (u32, u32) = (11, 59);

/// How bins are selected within the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BinMode {
    /// Bins tile the full requested range with no filtering.
    #[default]
    ContinuousRange,
    /// Bins are restricted to a repeating daily time-of-day window on
    /// selected weekdays.
    RecurringPeriod,
}

/// Configuration for a bin generation request.
///
/// All timestamps are naive local time at minute resolution. The
/// time-of-day fields and `days_of_week` are meaningful only in
/// [`BinMode::RecurringPeriod`].
///
/// # Example
///
/// ```rust
/// use chrono::{NaiveDate, Weekday};
/// use timebin_core::types::{BinMode, BinOptions, Granularity};
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// let options = BinOptions::new(start, end, Granularity::FifteenMinutes)
///     .with_mode(BinMode::RecurringPeriod)
///     .with_time_of_day(8, 0, 17, 0)
///     .with_days_of_week(vec![Weekday::Mon, Weekday::Tue]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinOptions {
    /// Lower bound of the overall request.
    pub start: NaiveDateTime,
    /// Upper bound of the overall request.
    pub end: NaiveDateTime,
    /// Nominal bin width or calendar grouping.
    pub granularity: Granularity,
    /// Continuous tiling or recurring-period filtering.
    pub mode: BinMode,
    /// Recurring window start hour (0-23).
    pub time_of_day_start_hour: Option<u32>,
    /// Recurring window start minute (0-59).
    pub time_of_day_start_minute: Option<u32>,
    /// Recurring window end hour (0-23).
    pub time_of_day_end_hour: Option<u32>,
    /// Recurring window end minute (0-59).
    pub time_of_day_end_minute: Option<u32>,
    /// Weekdays admitted by the recurring filter.
    pub days_of_week: Vec<Weekday>,
}

impl BinOptions {
    /// Creates a continuous-range request with no recurring filter.
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, granularity: Granularity) -> Self {
        Self {
            start,
            end,
            granularity,
            mode: BinMode::ContinuousRange,
            time_of_day_start_hour: None,
            time_of_day_start_minute: None,
            time_of_day_end_hour: None,
            time_of_day_end_minute: None,
            days_of_week: Vec::new(),
        }
    }

    /// Sets the bin mode.
    #[must_use]
    pub fn with_mode(mut self, mode: BinMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets all four time-of-day fields at once.
    #[must_use]
    pub fn with_time_of_day(
        mut self,
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Self {
        self.time_of_day_start_hour = Some(start_hour);
        self.time_of_day_start_minute = Some(start_minute);
        self.time_of_day_end_hour = Some(end_hour);
        self.time_of_day_end_minute = Some(end_minute);
        self
    }

    /// Sets the admitted weekdays.
    #[must_use]
    pub fn with_days_of_week(mut self, days: Vec<Weekday>) -> Self {
        self.days_of_week = days;
        self
    }

    /// Returns true if `weekday` passes the weekday filter.
    #[must_use]
    pub fn admits_weekday(&self, weekday: Weekday) -> bool {
        self.days_of_week.contains(&weekday)
    }

    /// Resolves the time-of-day window, requiring all four fields.
    ///
    /// This is the policy for the minute, week, day, and month paths.
    ///
    /// # Errors
    ///
    /// Returns `BinError::MissingTimeOfDay` if any field is unset, or
    /// `BinError::InvalidTimeOfDay` if a field is out of range.
    pub fn required_window(&self) -> BinResult<TimeOfDayWindow> {
        match (
            self.time_of_day_start_hour,
            self.time_of_day_start_minute,
            self.time_of_day_end_hour,
            self.time_of_day_end_minute,
        ) {
            (Some(sh), Some(sm), Some(eh), Some(em)) => {
                TimeOfDayWindow::from_fields(sh, sm, eh, em)
            }
            _ => Err(BinError::missing_time_of_day(self.granularity)),
        }
    }

    /// Resolves the time-of-day window, defaulting missing fields to
    /// `00:00` / `11:59`.
    ///
    /// This is the policy for the year path only.
    ///
    /// # Errors
    ///
    /// Returns `BinError::InvalidTimeOfDay` if a present field is out of
    /// range.
    pub fn defaulted_window(&self) -> BinResult<TimeOfDayWindow> {
        TimeOfDayWindow::from_fields(
            self.time_of_day_start_hour.unwrap_or(DEFAULT_START.0),
            self.time_of_day_start_minute.unwrap_or(DEFAULT_START.1),
            self.time_of_day_end_hour.unwrap_or(DEFAULT_END.0),
            self.time_of_day_end_minute.unwrap_or(DEFAULT_END.1),
        )
    }
}
