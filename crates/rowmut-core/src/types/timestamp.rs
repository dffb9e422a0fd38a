use serde::{Deserialize, Serialize};
use std::{
    fmt,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

///
/// Timestamp
/// (in microseconds since the Unix epoch)
///
/// Cell version stamped on every mutation. Always supplied by the caller;
/// nothing in the encoder reads the clock.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_micros(us: i64) -> Self {
        Self(us)
    }

    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms.saturating_mul(1_000))
    }

    #[must_use]
    pub const fn as_micros(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0 / 1_000
    }

    /// Drop sub-millisecond precision, truncating toward zero.
    #[must_use]
    pub const fn truncate_to_millis(self) -> Self {
        Self(self.0 - self.0 % 1_000)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.0)
    }
}

fn micros_saturating(d: Duration) -> i64 {
    i64::try_from(d.as_micros()).unwrap_or(i64::MAX)
}

impl From<SystemTime> for Timestamp {
    fn from(t: SystemTime) -> Self {
        match t.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(micros_saturating(after)),
            Err(before) => Self(micros_saturating(before.duration()).saturating_neg()),
        }
    }
}

#[cfg(feature = "time")]
impl From<time::OffsetDateTime> for Timestamp {
    fn from(t: time::OffsetDateTime) -> Self {
        let micros = t.unix_timestamp_nanos() / 1_000;
        Self(i64::try_from(micros).unwrap_or(if micros < 0 { i64::MIN } else { i64::MAX }))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip() {
        let ts = Timestamp::from_millis(1_700_000_000_123);
        assert_eq!(ts.as_micros(), 1_700_000_000_123_000);
        assert_eq!(ts.as_millis(), 1_700_000_000_123);
    }

    #[test]
    fn truncate_drops_sub_millisecond_part() {
        assert_eq!(
            Timestamp::from_micros(1_234_567).truncate_to_millis(),
            Timestamp::from_micros(1_234_000)
        );
        assert_eq!(
            Timestamp::from_micros(-1_234_567).truncate_to_millis(),
            Timestamp::from_micros(-1_234_000)
        );
    }

    #[test]
    fn from_system_time() {
        let t = UNIX_EPOCH + Duration::from_micros(42);
        assert_eq!(Timestamp::from(t), Timestamp::from_micros(42));

        let t = UNIX_EPOCH - Duration::from_micros(42);
        assert_eq!(Timestamp::from(t), Timestamp::from_micros(-42));
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&Timestamp::from_micros(7)).unwrap();
        assert_eq!(json, "7");
    }
}
