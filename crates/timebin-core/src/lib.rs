//! # Timebin Core
//!
//! Time-bin generation for aggregate performance reporting.
//!
//! Given a date range, a bin granularity (15/30/60 minutes, day, week,
//! month, year), and an optional recurring time-of-day + weekday filter,
//! [`generate_bins`] produces an ordered set of non-overlapping half-open
//! intervals ("bins"), grouped into one or more containers. Downstream
//! reporting aggregates measurements (counts, performance metrics) into
//! these bins; this crate only computes the interval boundaries.
//!
//! All timestamps are naive local time at minute resolution. No timezone
//! conversion is performed.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use timebin_core::prelude::*;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! let options = BinOptions::new(start, end, Granularity::Hour);
//! let containers = generate_bins(&options).unwrap();
//!
//! assert_eq!(containers.len(), 1);
//! assert_eq!(containers[0].len(), 24);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod generator;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BinError, BinResult};
    pub use crate::generator::generate_bins;
    pub use crate::types::{Bin, BinContainer, BinMode, BinOptions, Granularity, TimeOfDayWindow};
}

// Re-export commonly used items at crate root
pub use error::{BinError, BinResult};
pub use generator::generate_bins;
pub use types::{Bin, BinContainer, BinMode, BinOptions, Granularity, TimeOfDayWindow};
