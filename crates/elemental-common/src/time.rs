//! Timestamps as carried by the MediaConvert API.
//!
//! The service encodes instants as unix epoch seconds (possibly fractional).
//! RFC 3339 strings are accepted on input as well, since hand-written job
//! documents tend to use them. Values are kept at millisecond precision,
//! the precision the service works in.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wrap a chrono `DateTime<Utc>`, rounded to the nearest millisecond.
    #[must_use]
    pub fn new(inner: DateTime<Utc>) -> Self {
        Self(inner.round_subsecs(3))
    }

    /// Build a timestamp from whole epoch seconds.
    ///
    /// Returns `None` when the value is outside chrono's representable range.
    pub fn from_epoch_seconds(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Build a timestamp from fractional epoch seconds, rounded to the
    /// nearest millisecond.
    pub fn from_fractional_seconds(secs: f64) -> Option<Self> {
        if !secs.is_finite() {
            return None;
        }
        let millis = (secs * 1000.0).round();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64).map(Self)
    }

    /// Return the wrapped `DateTime<Utc>`.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Whole epoch seconds, truncating any sub-second part.
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.0.timestamp()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(inner: DateTime<Utc>) -> Self {
        Self::new(inner)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.timestamp_subsec_nanos() == 0 {
            serializer.serialize_i64(self.0.timestamp())
        } else {
            serializer.serialize_f64(self.0.timestamp_millis() as f64 / 1000.0)
        }
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds or an RFC 3339 timestamp")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Timestamp::from_epoch_seconds(v)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v).map_err(|_| E::custom(format!("timestamp out of range: {v}")))?;
        self.visit_i64(secs)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Timestamp::from_fractional_seconds(v)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if let Ok(secs) = v.parse::<f64>() {
            return self.visit_f64(secs);
        }
        DateTime::parse_from_rfc3339(v)
            .map(|dt| Timestamp::new(dt.with_timezone(&Utc)))
            .map_err(|e| E::custom(format!("invalid timestamp {v:?}: {e}")))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_seconds_roundtrip_as_integer() {
        let ts = Timestamp::from_epoch_seconds(1_586_000_000).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1586000000");

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn fractional_seconds_are_kept() {
        let ts: Timestamp = serde_json::from_str("1586000000.5").unwrap();
        assert_eq!(ts.epoch_seconds(), 1_586_000_000);
        assert_eq!(ts.as_datetime().timestamp_subsec_millis(), 500);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1586000000.5");
    }

    #[test]
    fn rfc3339_strings_are_accepted() {
        let ts: Timestamp = serde_json::from_str(r#""2020-04-04T11:33:20Z""#).unwrap();
        assert_eq!(ts.epoch_seconds(), 1_586_000_000);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(serde_json::from_str::<Timestamp>(r#""yesterday""#).is_err());
        assert!(serde_json::from_str::<Timestamp>("true").is_err());
    }

    #[test]
    fn number_and_string_forms_agree() {
        let from_number: Timestamp = serde_json::from_str("1586000000.123").unwrap();
        let from_string: Timestamp =
            serde_json::from_str(r#""2020-04-04T11:33:20.123Z""#).unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.to_string(), "2020-04-04T11:33:20.123Z");
        assert_eq!(from_string.to_string(), "2020-04-04T11:33:20.123Z");
    }

    #[test]
    fn rounding_carries_into_the_next_second() {
        let ts = Timestamp::from_fractional_seconds(1.9999999999).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01T00:00:02Z");
        assert_eq!(serde_json::to_string(&ts).unwrap(), "2");
    }

    #[test]
    fn sub_millisecond_input_is_rounded() {
        let from_string: Timestamp =
            serde_json::from_str(r#""2020-04-04T11:33:20.1236Z""#).unwrap();
        assert_eq!(from_string.to_string(), "2020-04-04T11:33:20.124Z");

        let json = serde_json::to_string(&from_string).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, from_string);
    }

    #[test]
    fn out_of_range_fractions_are_rejected() {
        assert!(Timestamp::from_fractional_seconds(1e300).is_none());
    }

    #[test]
    fn display_is_rfc3339() {
        let ts = Timestamp::from_epoch_seconds(0).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn non_finite_fractions_are_rejected() {
        assert!(Timestamp::from_fractional_seconds(f64::INFINITY).is_none());
        assert!(Timestamp::from_fractional_seconds(f64::NAN).is_none());
    }
}
