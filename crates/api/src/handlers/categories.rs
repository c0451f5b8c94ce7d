//! Handlers for the `/categories` resource.
//!
//! Read-only views of the category catalog and its rule table, so clients
//! can render the right form fields before an item is ever validated.

use axum::extract::Path;
use axum::Json;
use rentdesk_core::category::PropertyCategory;
use rentdesk_core::error::CoreError;
use rentdesk_core::lease::{LeaseGroup, RentalDurationType};
use rentdesk_core::metadata::PropertyMetadata;
use rentdesk_core::validation::rules::{rules_for, CategoryRules};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Catalog entry returned by `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub code: PropertyCategory,
    pub duration_type: RentalDurationType,
    pub lease_group: LeaseGroup,
    pub residential: bool,
    pub commercial: bool,
}

impl From<PropertyCategory> for CategoryInfo {
    fn from(category: PropertyCategory) -> Self {
        Self {
            code: category,
            duration_type: category.duration_type(),
            lease_group: category.lease_group(),
            residential: category.is_residential(),
            commercial: category.is_commercial(),
        }
    }
}

/// Rule descriptor returned by `GET /categories/{code}/rules`.
#[derive(Debug, Serialize)]
pub struct CategoryRulesResponse {
    pub code: PropertyCategory,
    #[serde(flatten)]
    pub rules: CategoryRules,
}

fn lookup(code: &str) -> Result<PropertyCategory, CoreError> {
    PropertyCategory::from_code(code).ok_or_else(|| CoreError::UnknownCategory(code.to_string()))
}

/// GET /api/v1/categories
pub async fn list_categories() -> Json<DataResponse<Vec<CategoryInfo>>> {
    let data = PropertyCategory::ALL.into_iter().map(CategoryInfo::from).collect();
    Json(DataResponse { data })
}

/// GET /api/v1/categories/{code}/rules
///
/// Returns 404 for codes outside the catalog.
pub async fn get_rules(
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<CategoryRulesResponse>>> {
    let category = lookup(&code)?;
    Ok(Json(DataResponse {
        data: CategoryRulesResponse {
            code: category,
            rules: rules_for(category),
        },
    }))
}

/// GET /api/v1/categories/{code}/metadata-template
///
/// A well-formed, empty version-1 metadata document for new items.
pub async fn metadata_template(
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let category = lookup(&code)?;
    let data = PropertyMetadata::for_category(category).to_value()?;
    Ok(Json(DataResponse { data }))
}
