//! Bin granularity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes in one week (7 * 24 * 60).
const MINUTES_PER_WEEK: i64 = 10_080;

/// Nominal width or grouping of generated bins.
///
/// The minute granularities and [`Granularity::Week`] produce fixed-width
/// bins; the remaining variants group by calendar unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Granularity {
    /// 15-minute bins
    #[default]
    FifteenMinutes,
    /// 30-minute bins
    ThirtyMinutes,
    /// 60-minute bins
    Hour,
    /// One bin per calendar day
    Day,
    /// Fixed-width bins of 7 days (10080 minutes)
    Week,
    /// Calendar-month grouping
    Month,
    /// Calendar-year grouping
    Year,
}

impl Granularity {
    /// Returns the bin width in minutes for fixed-width granularities.
    ///
    /// Returns `None` for the calendar-unit granularities (day, month, year).
    #[must_use]
    pub fn width_minutes(&self) -> Option<i64> {
        match self {
            Granularity::FifteenMinutes => Some(15),
            Granularity::ThirtyMinutes => Some(30),
            Granularity::Hour => Some(60),
            Granularity::Week => Some(MINUTES_PER_WEEK),
            Granularity::Day | Granularity::Month | Granularity::Year => None,
        }
    }

    /// Returns true if bins of this granularity all share one fixed width.
    #[must_use]
    pub fn is_fixed_width(&self) -> bool {
        self.width_minutes().is_some()
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::FifteenMinutes => "15-minute",
            Granularity::ThirtyMinutes => "30-minute",
            Granularity::Hour => "hourly",
            Granularity::Day => "day",
            Granularity::Week => "weekly",
            Granularity::Month => "monthly",
            Granularity::Year => "yearly",
        };
        write!(f, "{name}")
    }
}
