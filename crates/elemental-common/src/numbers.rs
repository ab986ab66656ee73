//! Numeric value types.

use serde::{ser, Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A double-precision value stored in a shape.
///
/// Equality and hashing compare the canonical bit pattern instead of IEEE
/// semantics, which lets every shape derive `Eq` and `Hash`. Positive and
/// negative zero compare equal, and all NaNs compare equal to each other.
///
/// JSON has no spelling for NaN or infinities, so serializing a non-finite
/// value is an error rather than a silent `null`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(transparent)]
pub struct Float(f64);

impl Float {
    /// Wrap a raw `f64`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw `f64`.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    fn canonical_bits(self) -> u64 {
        if self.0 == 0.0 {
            0
        } else if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl Serialize for Float {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            return Err(ser::Error::custom(format!(
                "cannot encode non-finite number {}",
                self.0
            )));
        }
        serializer.serialize_f64(self.0)
    }
}

impl From<f64> for Float {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Float> for f64 {
    fn from(value: Float) -> Self {
        value.0
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: Float) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn zeroes_are_equal() {
        assert_eq!(Float::new(0.0), Float::new(-0.0));
        assert_eq!(hash_of(Float::new(0.0)), hash_of(Float::new(-0.0)));
    }

    #[test]
    fn nans_are_equal() {
        let a = Float::new(f64::NAN);
        let b = Float::new(-f64::NAN);
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
    }

    #[test]
    fn distinct_values_differ() {
        assert_ne!(Float::new(-3.0), Float::new(-1.5));
    }

    #[test]
    fn display_matches_f64() {
        assert_eq!(Float::new(-1.5).to_string(), "-1.5");
        assert_eq!(Float::new(2.0).to_string(), "2");
    }

    #[test]
    fn non_finite_values_fail_to_serialize() {
        assert!(serde_json::to_string(&Float::new(f64::NAN)).is_err());
        assert!(serde_json::to_string(&Float::new(f64::INFINITY)).is_err());
        assert!(serde_json::to_string(&Float::new(f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Float::new(0.25)).unwrap();
        assert_eq!(json, "0.25");

        let parsed: Float = serde_json::from_str("90").unwrap();
        assert_eq!(parsed.get(), 90.0);
    }
}
