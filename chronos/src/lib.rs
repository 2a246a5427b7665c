//! This crate provides `Chronos`, a time of day which splits the day into
//! 16 * 16 * 16 * 16 equal moments instead of the usual 24 * 60 * 60 seconds.
//! A chronos is written as four hexadecimal digits: `0000` is the start of the
//! day, `8000` is half way through the day and `FFFF` is the last moment of
//! the day.
//!
//! A chronos holds no date. The same time tomorrow is the exact same chronos,
//! and arithmetic wraps around midnight in both directions.
//!
//! ```
//! use chronos::Chronos;
//!
//! let noon: Chronos = "8000".parse().unwrap();
//! assert_eq!(noon.to_time(), time::Time::from_hms(12, 0, 0).unwrap());
//!
//! let last = Chronos::parse("FFFF").unwrap();
//! assert_eq!(last + Chronos::from_moments(1), Chronos::MIDNIGHT);
//! ```
//!
//! All conversions use integer arithmetic only. Since `NANOS_PER_DAY` is an
//! exact multiple of `MOMENTS_PER_DAY`, converting a chronos to a duration and
//! back is exact, while converting a duration to a chronos rounds down to the
//! start of the moment containing it.

mod chronos;
mod errors;
mod parse;
#[cfg(feature = "serde-serialize")]
mod serialize;
mod wallclock;

pub use crate::chronos::Chronos;
pub use errors::ParseError;
pub use parse::ParsePolicy;

/// The number of distinct moments in one day.
pub const MOMENTS_PER_DAY: u32 = 1 << 16;

/// The number of nanoseconds in one day, ignoring leap seconds.
pub const NANOS_PER_DAY: u64 = 86_400 * NANOS_PER_SEC;

/// The length of a single moment, roughly 1.32 milliseconds.
pub const NANOS_PER_MOMENT: u64 = NANOS_PER_DAY / MOMENTS_PER_DAY as u64;

/// The number of hex digits in the canonical string form.
pub const DIGITS: usize = 4;

const NANOS_PER_SEC: u64 = 1_000_000_000;
