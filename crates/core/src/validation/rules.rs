//! Per-category rule table.
//!
//! Each category maps to a [`CategoryRules`] descriptor: the structural
//! requirements checked by the required-fields check and the extra
//! requirements checked at publish time. Categories without special rules
//! (and unknown codes) get [`CategoryRules::NONE`].

use serde::Serialize;
use serde_json::Value;

use crate::category::PropertyCategory;
use crate::item::RentableItem;
use crate::metadata::{is_present, is_truthy, MetadataView};

// ---------------------------------------------------------------------------
// Requirement descriptors
// ---------------------------------------------------------------------------

/// Top-level item fields a rule can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemField {
    Bedrooms,
    Bathrooms,
    FrontageM,
}

impl ItemField {
    fn is_set(&self, item: &RentableItem) -> bool {
        match self {
            Self::Bedrooms => item.bedrooms.is_some(),
            Self::Bathrooms => item.bathrooms.is_some(),
            Self::FrontageM => item.frontage_m.is_some(),
        }
    }
}

/// What a single rule demands of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum Requirement {
    /// The item field is set. Zero counts as set.
    ItemField(ItemField),
    /// `metadata.details.<key>` is present.
    Detail(&'static str),
    /// `metadata.details.<key>` is a JSON boolean, `false` included.
    DetailBoolean(&'static str),
    /// `metadata.details.<key>` is truthy.
    DetailTruthy(&'static str),
    /// `metadata.legal_documents.<key>` is present.
    LegalDocument(&'static str),
}

impl Requirement {
    pub fn is_satisfied(&self, item: &RentableItem, metadata: &MetadataView<'_>) -> bool {
        match self {
            Self::ItemField(field) => field.is_set(item),
            Self::Detail(key) => is_present(metadata.detail(key)),
            Self::DetailBoolean(key) => metadata.detail(key).is_some_and(Value::is_boolean),
            Self::DetailTruthy(key) => is_truthy(metadata.detail(key)),
            Self::LegalDocument(key) => is_present(metadata.legal_document(key)),
        }
    }
}

/// A requirement paired with the message reported when it is not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub requirement: Requirement,
    pub message: &'static str,
}

impl Rule {
    const fn new(requirement: Requirement, message: &'static str) -> Self {
        Self {
            requirement,
            message,
        }
    }
}

/// Rule descriptor for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryRules {
    /// Checked by the required-fields check.
    pub structural: &'static [Rule],
    /// Legal and compliance rules checked at publish time.
    pub publish: &'static [Rule],
}

impl CategoryRules {
    pub const NONE: CategoryRules = CategoryRules {
        structural: &[],
        publish: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.structural.is_empty() && self.publish.is_empty()
    }
}

/// Evaluate `rules` in order, collecting the message of every unmet rule.
pub fn collect_violations(
    rules: &[Rule],
    item: &RentableItem,
    metadata: &MetadataView<'_>,
    errors: &mut Vec<String>,
) {
    for rule in rules {
        if !rule.requirement.is_satisfied(item, metadata) {
            errors.push(rule.message.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_BEDROOMS_REQUIRED: &str = "Bedrooms is required";
pub const MSG_BATHROOMS_REQUIRED: &str = "Bathrooms is required";
pub const MSG_FRONTAGE_REQUIRED: &str = "Frontage (m) is required";
pub const MSG_BUSINESS_PURPOSE_REQUIRED: &str = "Business purpose is required for offices";
pub const MSG_POWER_CAPACITY_REQUIRED: &str = "Power capacity (kW) is required for factories";
pub const MSG_THREE_PHASE_REQUIRED: &str =
    "Three-phase power must be specified as true or false for factories";
pub const MSG_HOTEL_LICENSE_REQUIRED: &str = "Hotel business license is required";
pub const MSG_LAND_USE_CERTIFICATE_REQUIRED: &str = "Land use certificate is required";
pub const MSG_FIRE_SAFETY_REQUIRED: &str = "Fire safety compliance must be confirmed for factories";

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

const RESIDENTIAL: &[Rule] = &[
    Rule::new(Requirement::ItemField(ItemField::Bedrooms), MSG_BEDROOMS_REQUIRED),
    Rule::new(Requirement::ItemField(ItemField::Bathrooms), MSG_BATHROOMS_REQUIRED),
];

const COMMERCIAL: &[Rule] = &[Rule::new(
    Requirement::ItemField(ItemField::FrontageM),
    MSG_FRONTAGE_REQUIRED,
)];

const OFFICE: &[Rule] = &[Rule::new(
    Requirement::Detail("business_purpose"),
    MSG_BUSINESS_PURPOSE_REQUIRED,
)];

const FACTORY: &[Rule] = &[
    Rule::new(Requirement::Detail("power_capacity_kw"), MSG_POWER_CAPACITY_REQUIRED),
    Rule::new(Requirement::DetailBoolean("three_phase_power"), MSG_THREE_PHASE_REQUIRED),
];

const HOTEL_PUBLISH: &[Rule] = &[Rule::new(
    Requirement::LegalDocument("hotel_business_license"),
    MSG_HOTEL_LICENSE_REQUIRED,
)];

const LAND_PLOT_PUBLISH: &[Rule] = &[Rule::new(
    Requirement::LegalDocument("land_use_certificate"),
    MSG_LAND_USE_CERTIFICATE_REQUIRED,
)];

const FACTORY_PUBLISH: &[Rule] = &[Rule::new(
    Requirement::DetailTruthy("fire_safety_compliance"),
    MSG_FIRE_SAFETY_REQUIRED,
)];

/// Rule descriptor for a known category.
pub fn rules_for(category: PropertyCategory) -> CategoryRules {
    match category {
        PropertyCategory::Hotel => CategoryRules {
            structural: &[],
            publish: HOTEL_PUBLISH,
        },
        PropertyCategory::LandPlot => CategoryRules {
            structural: COMMERCIAL,
            publish: LAND_PLOT_PUBLISH,
        },
        PropertyCategory::Office => CategoryRules {
            structural: OFFICE,
            publish: &[],
        },
        PropertyCategory::Factory => CategoryRules {
            structural: FACTORY,
            publish: FACTORY_PUBLISH,
        },
        c if c.is_commercial() => CategoryRules {
            structural: COMMERCIAL,
            publish: &[],
        },
        c if c.is_residential() => CategoryRules {
            structural: RESIDENTIAL,
            publish: &[],
        },
        _ => CategoryRules::NONE,
    }
}

/// Rule descriptor for a raw category code; unknown codes carry no rules.
pub fn rules_for_code(code: &str) -> CategoryRules {
    PropertyCategory::from_code(code)
        .map(rules_for)
        .unwrap_or(CategoryRules::NONE)
}
