//! Rentable-item rule engine.
//!
//! Three independent checks, all pure and non-throwing: metadata
//! well-formedness ([`metadata`]), publish eligibility ([`publish`]) and
//! per-category required fields ([`required_fields`]). [`gate`] combines
//! the publish-path checks into a single decision.

pub mod gate;
pub mod metadata;
pub mod publish;
pub mod required_fields;
pub mod result;
pub mod rules;
pub mod time;

pub use gate::{evaluate_publish, PublishReport};
pub use metadata::validate_metadata;
pub use publish::validate_for_publish;
pub use required_fields::validate_required_fields_by_type;
pub use result::ValidationResult;
