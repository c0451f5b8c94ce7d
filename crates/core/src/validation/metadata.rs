//! Metadata well-formedness check, used on the save path.

use serde_json::Value;

use crate::lease::LeaseGroup;
use crate::metadata::{
    is_present, MetadataView, KEY_DETAILS, KEY_LEASE_GROUP, KEY_PROPERTY_TYPE, KEY_VERSION,
    METADATA_VERSION,
};

use super::result::ValidationResult;

pub const MSG_METADATA_REQUIRED: &str = "Metadata is required";
pub const MSG_VERSION_INVALID: &str = "Metadata version must be 1";
pub const MSG_PROPERTY_TYPE_REQUIRED: &str = "Metadata property_type is required";
pub const MSG_LEASE_GROUP_INVALID: &str = "Metadata lease_group must be one of SHORT, MID, LONG";
pub const MSG_DETAILS_INVALID: &str = "Metadata details must be an object";

/// Check that `metadata` is a well-formed version-1 document.
///
/// Missing or non-object metadata yields exactly one error. Otherwise the
/// version, property type, lease group and details checks all run and
/// their errors accumulate in that order.
pub fn validate_metadata(metadata: Option<&Value>) -> ValidationResult {
    let view = MetadataView::new(metadata);
    if !view.is_present() {
        return ValidationResult::from_errors(vec![MSG_METADATA_REQUIRED.to_string()]);
    }

    let mut errors = Vec::new();

    if !is_supported_version(view.get(KEY_VERSION)) {
        errors.push(MSG_VERSION_INVALID.to_string());
    }

    if !is_present(view.get(KEY_PROPERTY_TYPE)) {
        errors.push(MSG_PROPERTY_TYPE_REQUIRED.to_string());
    }

    let lease_group = view
        .get(KEY_LEASE_GROUP)
        .and_then(Value::as_str)
        .and_then(LeaseGroup::from_code);
    if lease_group.is_none() {
        errors.push(MSG_LEASE_GROUP_INVALID.to_string());
    }

    if !view.get(KEY_DETAILS).is_some_and(Value::is_object) {
        errors.push(MSG_DETAILS_INVALID.to_string());
    }

    ValidationResult::from_errors(errors)
}

/// Numeric 1 (`1` or `1.0`); strings such as `"1"` are rejected.
fn is_supported_version(version: Option<&Value>) -> bool {
    version
        .and_then(Value::as_f64)
        .is_some_and(|v| v == METADATA_VERSION as f64)
}
