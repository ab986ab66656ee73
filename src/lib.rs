//! Elemental - inspection tooling for AWS Elemental MediaConvert documents
//!
//! The data model lives in `elemental-model`; this crate adds configuration
//! and document loading for the `elemental` binary.

pub mod config;
pub mod document;

pub use elemental_model as model;
