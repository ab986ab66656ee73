//! Elemental-Common: Shared value types, errors, and rendering helpers.
//!
//! This crate provides the pieces every MediaConvert shape is built from:
//!
//! - **Error Handling**: the common [`Error`] type and [`Result`] alias
//! - **Numbers**: [`Float`], a double that keeps shapes `Eq + Hash`
//! - **Time**: [`Timestamp`], a UTC instant carried as epoch seconds on the wire
//! - **Rendering**: the [`Render`] trait behind every shape's `Display`
//!
//! # Examples
//!
//! ```
//! use elemental_common::{Error, Float, Result, Timestamp};
//!
//! let level = Float::new(-3.0);
//! assert_eq!(level.get(), -3.0);
//!
//! let created = Timestamp::from_epoch_seconds(1_586_000_000).unwrap();
//! assert_eq!(created.to_string(), "2020-04-04T11:33:20Z");
//!
//! fn strict() -> Result<()> {
//!     Err(Error::unknown_variant("AacRateControlMode", "ABR"))
//! }
//! assert!(strict().is_err());
//! ```

pub mod error;
pub mod numbers;
pub mod render;
pub mod time;

pub use error::{Error, Result};
pub use numbers::Float;
pub use render::{FieldList, Render};
pub use time::Timestamp;
