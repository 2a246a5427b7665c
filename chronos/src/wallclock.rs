//! Conversions between a chronos and wall-clock time.
//!
//! Every conversion anchors to midnight UTC. Local offsets are normalized away
//! on the way in, and the way out always produces a UTC timestamp on a date
//! chosen by the caller.

use std::time::SystemTime;

use clocksource::precise::UnixInstant;
use time::{Date, OffsetDateTime, Time};

use crate::{Chronos, NANOS_PER_SEC};

impl Chronos {
    /// Return the chronos for the current moment, read from the system
    /// realtime clock.
    pub fn now() -> Self {
        Self::from(UnixInstant::now())
    }

    /// Create a chronos from a timestamp. The timestamp is normalized to UTC
    /// and its date is ignored.
    pub fn from_wall_clock(timestamp: OffsetDateTime) -> Self {
        // shift the local time of day by the offset instead of moving the
        // date, which may leave the representable range near year +/-9999
        let offset = timestamp.offset().whole_seconds() as i128 * NANOS_PER_SEC as i128;
        Self::from_nanos(nanos_since_midnight(timestamp.time()) - offset)
    }

    /// Create a chronos from a time of day, which is taken to be in UTC.
    pub fn from_time(time: Time) -> Self {
        Self::from_nanos(nanos_since_midnight(time))
    }

    /// Create a chronos from a reading of the system clock. Readings from
    /// before the unix epoch are handled the same as any other.
    pub fn from_system_time(time: SystemTime) -> Self {
        let nanos = match time.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(since) => since.as_nanos() as i128,
            Err(e) => -(e.duration().as_nanos() as i128),
        };
        Self::from_nanos(nanos)
    }

    /// Return the time of day at the start of this moment.
    pub fn to_time(&self) -> Time {
        Time::MIDNIGHT + self.to_duration()
    }

    /// Return the UTC timestamp for this moment on the provided date.
    pub fn to_wall_clock(&self, date: Date) -> OffsetDateTime {
        date.with_time(self.to_time()).assume_utc()
    }
}

fn nanos_since_midnight(time: Time) -> i128 {
    let (hour, minute, second, nanosecond) = time.as_hms_nano();
    let seconds = hour as u64 * 3_600 + minute as u64 * 60 + second as u64;
    (seconds * NANOS_PER_SEC + nanosecond as u64) as i128
}

// the unix epoch is a UTC midnight, so time since the epoch reduces directly
// into a time of day
impl From<UnixInstant> for Chronos {
    fn from(instant: UnixInstant) -> Self {
        Self::from_nanos(instant.duration_since(UnixInstant::EPOCH).as_nanos() as i128)
    }
}

impl From<OffsetDateTime> for Chronos {
    fn from(timestamp: OffsetDateTime) -> Self {
        Self::from_wall_clock(timestamp)
    }
}

impl From<Time> for Chronos {
    fn from(time: Time) -> Self {
        Self::from_time(time)
    }
}
