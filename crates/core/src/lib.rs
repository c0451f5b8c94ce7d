//! Rentable-item rule engine.
//!
//! Pure, synchronous checks that decide whether a rentable item's metadata
//! is well formed and whether the item is ready to be published. The crate
//! has no I/O, logging, or persistence; callers decide what to do with a
//! failed result.

pub mod category;
pub mod error;
pub mod item;
pub mod lease;
pub mod metadata;
pub mod validation;
