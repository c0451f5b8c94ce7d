//! Publish gate: the combined decision used on the publish path.
//!
//! An item may be published only when both the publish-eligibility check
//! and the required-fields check for its own category pass.

use serde::{Deserialize, Serialize};

use crate::item::RentableItem;

use super::publish::validate_for_publish;
use super::required_fields::validate_required_fields_by_type;
use super::result::ValidationResult;

/// Both publish-path results, plus the overall verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReport {
    pub publishable: bool,
    pub publish: ValidationResult,
    pub required_fields: ValidationResult,
}

impl PublishReport {
    /// Every error from both checks, publish errors first.
    pub fn all_errors(&self) -> Vec<String> {
        self.publish
            .errors
            .iter()
            .chain(&self.required_fields.errors)
            .cloned()
            .collect()
    }
}

/// Run both publish-path checks against `item`'s declared category.
pub fn evaluate_publish(item: &RentableItem) -> PublishReport {
    let publish = validate_for_publish(item);
    let required_fields =
        validate_required_fields_by_type(item.property_type.as_deref().unwrap_or_default(), item);

    PublishReport {
        publishable: publish.valid && required_fields.valid,
        publish,
        required_fields,
    }
}
