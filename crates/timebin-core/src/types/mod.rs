//! Domain types for bin generation.
//!
//! This module provides the types consumed and produced by the generator:
//!
//! - [`BinOptions`]: the request (range, granularity, mode, recurring filter)
//! - [`Granularity`]: nominal bin width or calendar grouping
//! - [`BinMode`]: continuous tiling vs. recurring-period filtering
//! - [`TimeOfDayWindow`]: resolved half-open daily window
//! - [`Bin`]: a single half-open interval
//! - [`BinContainer`]: an ordered, optionally bounded group of bins

mod bin;
mod granularity;
mod options;
mod time_window;

pub use bin::{Bin, BinContainer};
pub use granularity::Granularity;
pub use options::{BinMode, BinOptions};
pub use time_window::TimeOfDayWindow;
