//! Common error types used throughout elemental.
//!
//! Building, reading and rendering shapes never fails. Errors only surface at
//! the edges: strict enumeration parsing, JSON encoding and decoding, and
//! document loading.

/// Common error type for elemental.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A strict enumeration parse met a value outside the modelled set.
    #[error("Unknown {kind} value: {value}")]
    UnknownVariant {
        /// Name of the enumeration, e.g. `AacRateControlMode`.
        kind: &'static str,
        /// The rejected wire value.
        value: String,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new UnknownVariant error.
    pub fn unknown_variant<S: Into<String>>(kind: &'static str, value: S) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unknown_variant("H264RateControlMode", "ABR");
        assert_eq!(err.to_string(), "Unknown H264RateControlMode value: ABR");

        let err = Error::invalid_input("empty document");
        assert_eq!(err.to_string(), "Invalid input: empty document");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::unknown_variant("AccelerationMode", String::from("TURBO"));
        match err {
            Error::UnknownVariant { kind, value } => {
                assert_eq!(kind, "AccelerationMode");
                assert_eq!(value, "TURBO");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = Error::invalid_input("bad data");
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_result_type() {
        fn error_fn() -> Result<i32> {
            Err(Error::invalid_input("nope"))
        }
        assert!(error_fn().is_err());
    }
}
