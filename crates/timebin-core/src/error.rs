//! Error types for the Timebin library.
//!
//! This module defines the error types used throughout Timebin,
//! providing structured error handling with context.

use thiserror::Error;

use crate::types::Granularity;

/// A specialized Result type for Timebin operations.
pub type BinResult<T> = Result<T, BinError>;

/// The main error type for Timebin operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BinError {
    /// Recurring-period mode was selected without a complete time-of-day window.
    #[error("Missing time-of-day fields for {granularity} bins in recurring-period mode")]
    MissingTimeOfDay {
        /// Granularity that required the window.
        granularity: Granularity,
    },

    /// A time-of-day field is outside the valid range.
    #[error("Invalid time of day: {hour:02}:{minute:02}")]
    InvalidTimeOfDay {
        /// Hour component (valid range 0-23).
        hour: u32,
        /// Minute component (valid range 0-59).
        minute: u32,
    },
}

impl BinError {
    /// Creates a missing time-of-day error.
    #[must_use]
    pub fn missing_time_of_day(granularity: Granularity) -> Self {
        Self::MissingTimeOfDay { granularity }
    }

    /// Creates an invalid time-of-day error.
    #[must_use]
    pub fn invalid_time_of_day(hour: u32, minute: u32) -> Self {
        Self::InvalidTimeOfDay { hour, minute }
    }
}
