//! Client-side data model for the AWS Elemental MediaConvert API.
//!
//! Every shape of the job specification schema is a plain value with
//! optional fields, a fluent builder, structural equality and hashing, and a
//! `{Label: value,...}` diagnostic rendering through `Display`. Nothing is
//! validated locally; range and pattern constraints are enforced by the
//! service.
//!
//! ```
//! use elemental_model::audio::{AacRateControlMode, AacSettings};
//!
//! let aac = AacSettings::builder()
//!     .bitrate(96000)
//!     .rate_control_mode("VBR")
//!     .build();
//!
//! assert_eq!(aac.bitrate(), Some(96000));
//! assert_eq!(aac.rate_control_mode(), Some(&AacRateControlMode::Vbr));
//! assert_eq!(aac.to_string(), "{Bitrate: 96000,RateControlMode: VBR}");
//!
//! let louder = aac.to_builder().bitrate(128000).build();
//! assert_ne!(aac, louder);
//! ```
//!
//! Enumeration values the crate does not model are kept as `Other(_)` and
//! survive a round trip; [`UnknownValues`] finds them.

#[macro_use]
mod macros;

pub mod audio;
pub mod captions;
pub mod catalog;
#[cfg(feature = "serde")]
pub mod codec;
pub mod containers;
pub mod encryption;
pub mod inputs;
pub mod job;
pub mod operations;
pub mod output_groups;
pub mod video;
pub mod walk;

pub use catalog::{enumerations, find_enumeration, EnumInfo};
pub use elemental_common::{Error, Float, Result, Timestamp};
pub use walk::{UnknownValue, UnknownValues};
