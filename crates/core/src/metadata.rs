//! Versioned rentable-item metadata.
//!
//! Metadata is authored by several upstream callers with varying
//! completeness, so the rule engine reads it through [`MetadataView`]
//! over raw JSON rather than deserializing it. [`PropertyMetadata`] is the
//! typed shape of a well-formed version-1 document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::category::PropertyCategory;
use crate::error::CoreError;
use crate::lease::LeaseGroup;

/// The only metadata schema version currently accepted.
pub const METADATA_VERSION: u64 = 1;

pub const KEY_VERSION: &str = "version";
pub const KEY_PROPERTY_TYPE: &str = "property_type";
pub const KEY_LEASE_GROUP: &str = "lease_group";
pub const KEY_DETAILS: &str = "details";
pub const KEY_LEGAL_DOCUMENTS: &str = "legal_documents";

/// A well-formed version-1 metadata document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    pub version: u64,
    pub property_type: String,
    pub lease_group: LeaseGroup,
    /// Category-specific fields; the expected keys depend on the category.
    pub details: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_documents: Option<Map<String, Value>>,
}

impl PropertyMetadata {
    /// Seed an empty document for a freshly created item of `category`.
    pub fn for_category(category: PropertyCategory) -> Self {
        Self {
            version: METADATA_VERSION,
            property_type: category.as_str().to_string(),
            lease_group: category.lease_group(),
            details: Map::new(),
            legal_documents: None,
        }
    }

    pub fn to_value(&self) -> Result<Value, CoreError> {
        serde_json::to_value(self).map_err(|e| CoreError::Internal(e.to_string()))
    }
}

/// Read-only navigator over untyped metadata JSON.
///
/// Anything that is not a JSON object is treated as absent metadata.
#[derive(Debug, Clone, Copy)]
pub struct MetadataView<'a> {
    root: Option<&'a Map<String, Value>>,
}

impl<'a> MetadataView<'a> {
    pub fn new(metadata: Option<&'a Value>) -> Self {
        Self {
            root: metadata.and_then(Value::as_object),
        }
    }

    /// True when the metadata is a JSON object with at least one key.
    pub fn is_present(&self) -> bool {
        self.root.is_some_and(|m| !m.is_empty())
    }

    /// True when the metadata is a JSON object, even an empty one.
    pub fn is_object(&self) -> bool {
        self.root.is_some()
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.root.and_then(|m| m.get(key))
    }

    pub fn details(&self) -> Option<&'a Map<String, Value>> {
        self.get(KEY_DETAILS).and_then(Value::as_object)
    }

    pub fn legal_documents(&self) -> Option<&'a Map<String, Value>> {
        self.get(KEY_LEGAL_DOCUMENTS).and_then(Value::as_object)
    }

    /// `metadata.details.<key>`, if any.
    pub fn detail(&self, key: &str) -> Option<&'a Value> {
        self.details().and_then(|d| d.get(key))
    }

    /// `metadata.legal_documents.<key>`, if any.
    pub fn legal_document(&self, key: &str) -> Option<&'a Value> {
        self.legal_documents().and_then(|d| d.get(key))
    }
}

/// A value is present unless it is missing, `null`, or an empty string.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        _ => true,
    }
}

/// Loose truthiness: `null`, `false`, zero and `""` are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
