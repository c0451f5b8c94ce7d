//! Per-category structural requirements.

use crate::item::RentableItem;
use crate::metadata::MetadataView;

use super::result::ValidationResult;
use super::rules::{collect_violations, rules_for_code};

/// Check the fields a category demands regardless of publish state.
///
/// Residential categories need room counts, commercial ones a frontage,
/// offices a business purpose and factories their power specification.
/// Categories outside these sets, including unknown codes, always pass.
pub fn validate_required_fields_by_type(
    category_code: &str,
    item: &RentableItem,
) -> ValidationResult {
    let rules = rules_for_code(category_code);
    let metadata = MetadataView::new(item.metadata.as_ref());

    let mut errors = Vec::new();
    collect_violations(rules.structural, item, &metadata, &mut errors);
    ValidationResult::from_errors(errors)
}
