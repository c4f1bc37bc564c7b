//! Bins and bin containers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single half-open time interval `[start, end)` used as an aggregation
/// bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    /// Inclusive lower bound.
    pub start: NaiveDateTime,
    /// Exclusive upper bound.
    pub end: NaiveDateTime,
}

impl Bin {
    /// Creates a new bin.
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns the bin width in whole minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Returns true if `t` falls inside the half-open interval.
    #[must_use]
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        t >= self.start && t < self.end
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// An ordered group of bins sharing a common period.
///
/// Minute, week, and day granularities produce a single unbounded container
/// holding every bin. Month and year granularities produce one container per
/// calendar month/year, each carrying its own bounding `start`/`end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinContainer {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    bins: Vec<Bin>,
}

impl BinContainer {
    /// Creates a container with no bounding period.
    #[must_use]
    pub fn unbounded(bins: Vec<Bin>) -> Self {
        Self {
            start: None,
            end: None,
            bins,
        }
    }

    /// Creates a container bounded by `[start, end)`.
    #[must_use]
    pub fn bounded(start: NaiveDateTime, end: NaiveDateTime, bins: Vec<Bin>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            bins,
        }
    }

    /// Returns the bounding period start, if any.
    #[must_use]
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    /// Returns the bounding period end, if any.
    #[must_use]
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    /// Returns the bins in chronological order.
    #[must_use]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Returns the number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns true if the container holds no bins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}
