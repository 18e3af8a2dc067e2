//! Core types for the Dungeons and Dragons dashboard.
//!
//! This crate defines the data model shared by the generator, the
//! filter/aggregate step, and the front ends: the six ability scores, the
//! inclusive ranges they are drawn from, and the character records that make
//! up a dataset. It has no randomness and no I/O.

/// The six ability scores and their display names.
pub mod attribute;
/// Error types used throughout the crate.
pub mod error;
/// Inclusive attribute ranges and the per-attribute range map.
pub mod range;
/// Character records and datasets.
pub mod record;

/// Re-export attribute types.
pub use attribute::Attribute;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export range types.
pub use range::{AttributeRange, RangeMap};
/// Re-export record types.
pub use record::{CharacterRecord, Dataset};
