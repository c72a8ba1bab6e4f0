//! Grade timestamps
//!
//! A `Timestamp` is the on-disk representation of a grade date: a single
//! signed 64-bit value that round-trips bit-for-bit through the codec.
//!
//! ## Bit Layout
//!
//! ```text
//! ┌───────────┬─────────────────────────────────────────────────┐
//! │ Kind (2)  │           Ticks (62)                             │
//! └───────────┴─────────────────────────────────────────────────┘
//!  bits 63-62   bits 61-0
//! ```
//!
//! Ticks are 100-nanosecond units counted from 0001-01-01T00:00:00. The two
//! kind bits record whether the instant was captured as unspecified, UTC, or
//! local wall-clock time. The whole value is opaque to the codec, which only
//! guarantees `from_bits(to_bits(t)) == t`.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};

/// 100 ns ticks per second
const TICKS_PER_SECOND: i64 = 10_000_000;

/// Ticks between 0001-01-01 and the Unix epoch
const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Low 62 bits hold the tick count
const TICKS_MASK: i64 = 0x3FFF_FFFF_FFFF_FFFF;

/// How the instant's wall-clock reference was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampKind {
    Unspecified,
    Utc,
    Local,
}

/// A grade date, stored as an opaque round-trippable i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Capture the current local wall-clock time
    pub fn now() -> Self {
        Self::from_local(Local::now())
    }

    /// Build a timestamp from a local datetime, tagged with the local kind
    pub fn from_local(dt: DateTime<Local>) -> Self {
        let naive = dt.naive_local().and_utc();
        let ticks = UNIX_EPOCH_TICKS
            + naive.timestamp() * TICKS_PER_SECOND
            + naive.timestamp_subsec_nanos() as i64 / 100;
        Self((ticks & TICKS_MASK) | ((TimestampKind::Local as i64 & 0b11) << 62))
    }

    /// Reconstruct the raw value read from a data file
    pub fn from_bits(bits: i64) -> Self {
        Self(bits)
    }

    /// The raw value written to a data file
    pub fn to_bits(self) -> i64 {
        self.0
    }

    /// The kind metadata carried in the top two bits
    pub fn kind(self) -> TimestampKind {
        match (self.0 >> 62) & 0b11 {
            1 => TimestampKind::Utc,
            2 => TimestampKind::Local,
            _ => TimestampKind::Unspecified,
        }
    }

    /// Interpret the tick count as a local datetime
    ///
    /// Returns `None` for tick values outside chrono's representable range
    /// or wall-clock times skipped by a DST transition.
    pub fn to_local(self) -> Option<DateTime<Local>> {
        let unix_ticks = (self.0 & TICKS_MASK) - UNIX_EPOCH_TICKS;
        let secs = unix_ticks.div_euclid(TICKS_PER_SECOND);
        let nanos = (unix_ticks.rem_euclid(TICKS_PER_SECOND) * 100) as u32;
        let naive = DateTime::from_timestamp(secs, nanos)?.naive_utc();
        Local.from_local_datetime(&naive).earliest()
    }
}

impl fmt::Display for Timestamp {
    /// Short date form used by the menus, e.g. "03.09.2024"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_local() {
            Some(dt) => write!(f, "{}", dt.format("%d.%m.%Y")),
            None => write!(f, "<invalid date>"),
        }
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    /// Orders by tick count; kind bits only break ties, keeping the order
    /// consistent with bit-for-bit equality
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.0 & TICKS_MASK, self.0 >> 62).cmp(&(other.0 & TICKS_MASK, other.0 >> 62))
    }
}
