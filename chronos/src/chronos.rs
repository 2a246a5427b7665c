use core::fmt::{Display, LowerHex, UpperHex};
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{NANOS_PER_DAY, NANOS_PER_MOMENT};

/// A time of day measured in moments since midnight (UTC).
///
/// Unlike `time::Time` the internal representation is a single `u16`, one
/// count per moment, so every possible value is a valid time of day and no
/// operation can leave the range `0000..=FFFF`. A `Chronos` does not know
/// which day it belongs to: adding or subtracting across midnight wraps to the
/// equivalent moment of the next or previous day without any indication that
/// the wrap happened.
///
/// Ordering compares position within the day, starting at midnight.
///
/// The size of a `Chronos` is always the same as a `u16`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Chronos {
    pub(crate) moments: u16,
}

impl Chronos {
    /// The first moment of the day, `0000`.
    pub const MIDNIGHT: Chronos = Chronos { moments: 0 };

    /// Half way through the day, `8000`.
    pub const NOON: Chronos = Chronos { moments: 0x8000 };

    /// The smallest representable chronos, equal to `MIDNIGHT`.
    pub const MIN: Chronos = Chronos { moments: u16::MIN };

    /// The last moment of the day, `FFFF`.
    pub const MAX: Chronos = Chronos { moments: u16::MAX };

    /// Create a chronos from a raw count of moments since midnight.
    pub const fn from_moments(moments: u16) -> Self {
        Self { moments }
    }

    /// Return the raw count of moments since midnight.
    pub const fn as_moments(&self) -> u16 {
        self.moments
    }

    /// Create a chronos from a signed count of nanoseconds since some
    /// midnight. Values beyond a day or before midnight wrap around, so `-1`
    /// lands in the last moment of the previous day.
    pub const fn from_nanos(nanos: i128) -> Self {
        // floored reduction, the result is in 0..NANOS_PER_DAY
        let nanos = nanos.rem_euclid(NANOS_PER_DAY as i128) as u64;

        // NANOS_PER_MOMENT divides NANOS_PER_DAY exactly, so this is the same
        // as nanos * MOMENTS_PER_DAY / NANOS_PER_DAY
        Self {
            moments: (nanos / NANOS_PER_MOMENT) as u16,
        }
    }

    /// Create a chronos from an elapsed duration. Durations longer than a day
    /// or negative durations wrap to the equivalent time of day.
    pub fn from_duration(duration: time::Duration) -> Self {
        Self::from_nanos(duration.whole_nanoseconds())
    }

    /// Create a chronos from an unsigned standard library duration, wrapping
    /// over whole days.
    pub fn from_std_duration(duration: core::time::Duration) -> Self {
        Self::from_nanos(duration.as_nanos() as i128)
    }

    /// Return the number of nanoseconds from midnight to the start of this
    /// moment. Always less than `NANOS_PER_DAY`.
    pub const fn as_nanos(&self) -> u64 {
        self.moments as u64 * NANOS_PER_MOMENT
    }

    /// Return the duration from midnight to the start of this moment.
    pub fn to_duration(&self) -> time::Duration {
        time::Duration::nanoseconds(self.as_nanos() as i64)
    }

    /// Return the duration from midnight to the start of this moment as a
    /// standard library duration.
    pub fn to_std_duration(&self) -> core::time::Duration {
        core::time::Duration::from_nanos(self.as_nanos())
    }

    /// Add two chronoses, wrapping past `FFFF` into the next day.
    pub const fn wrapping_add(self, rhs: Chronos) -> Self {
        Self {
            moments: self.moments.wrapping_add(rhs.moments),
        }
    }

    /// Subtract two chronoses, wrapping below `0000` into the previous day.
    pub const fn wrapping_sub(self, rhs: Chronos) -> Self {
        Self {
            moments: self.moments.wrapping_sub(rhs.moments),
        }
    }
}

impl From<u16> for Chronos {
    fn from(moments: u16) -> Self {
        Self { moments }
    }
}

impl From<Chronos> for u16 {
    fn from(chronos: Chronos) -> Self {
        chronos.moments
    }
}

impl Add<Chronos> for Chronos {
    type Output = Chronos;

    fn add(self, rhs: Chronos) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl AddAssign<Chronos> for Chronos {
    fn add_assign(&mut self, rhs: Chronos) {
        *self = self.wrapping_add(rhs);
    }
}

impl Sub<Chronos> for Chronos {
    type Output = Chronos;

    fn sub(self, rhs: Chronos) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign<Chronos> for Chronos {
    fn sub_assign(&mut self, rhs: Chronos) {
        *self = self.wrapping_sub(rhs);
    }
}

impl Add<time::Duration> for Chronos {
    type Output = Chronos;

    fn add(self, rhs: time::Duration) -> Self::Output {
        Chronos::from_nanos(self.as_nanos() as i128 + rhs.whole_nanoseconds())
    }
}

impl AddAssign<time::Duration> for Chronos {
    fn add_assign(&mut self, rhs: time::Duration) {
        *self = *self + rhs;
    }
}

impl Sub<time::Duration> for Chronos {
    type Output = Chronos;

    fn sub(self, rhs: time::Duration) -> Self::Output {
        Chronos::from_nanos(self.as_nanos() as i128 - rhs.whole_nanoseconds())
    }
}

impl SubAssign<time::Duration> for Chronos {
    fn sub_assign(&mut self, rhs: time::Duration) {
        *self = *self - rhs;
    }
}

impl Display for Chronos {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04X}", self.moments)
    }
}

impl UpperHex for Chronos {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        UpperHex::fmt(&self.moments, f)
    }
}

impl LowerHex for Chronos {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        LowerHex::fmt(&self.moments, f)
    }
}
