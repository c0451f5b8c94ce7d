//! Handlers for the `/rentable-items` validation endpoints.
//!
//! The save path calls the metadata check. By default it only reports; with
//! `?strict=true` invalid metadata is rejected with 400. The publish path
//! calls `publish-check`, which refuses with 422 unless both the publish and
//! required-fields checks pass.

use axum::extract::Query;
use axum::Json;
use rentdesk_core::item::RentableItem;
use rentdesk_core::validation::{
    evaluate_publish, validate_for_publish, validate_metadata as check_metadata,
    validate_required_fields_by_type, PublishReport, ValidationResult,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// Request body for `POST /rentable-items/validate/metadata`.
#[derive(Debug, Deserialize)]
pub struct ValidateMetadataRequest {
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Query parameters for `POST /rentable-items/validate/metadata`.
#[derive(Debug, Default, Deserialize)]
pub struct MetadataSaveParams {
    /// Reject invalid metadata instead of reporting it.
    #[serde(default)]
    pub strict: bool,
}

/// Request body for `POST /rentable-items/validate/required-fields`.
#[derive(Debug, Deserialize)]
pub struct RequiredFieldsRequest {
    pub category: String,
    #[serde(default)]
    pub item: RentableItem,
}

/// POST /api/v1/rentable-items/validate/metadata
///
/// Returns the result with 200. In strict mode a failed result becomes a
/// 400 `VALIDATION_ERROR` listing every violation.
pub async fn validate_metadata(
    Query(params): Query<MetadataSaveParams>,
    Json(body): Json<ValidateMetadataRequest>,
) -> AppResult<Json<DataResponse<ValidationResult>>> {
    let result = check_metadata(body.metadata.as_ref());
    tracing::debug!(
        strict = params.strict,
        valid = result.valid,
        errors = result.errors.len(),
        "Metadata validated"
    );

    let data = if params.strict {
        result.into_result()?
    } else {
        result
    };
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/rentable-items/validate/publish
pub async fn validate_publish(
    Json(item): Json<RentableItem>,
) -> Json<DataResponse<ValidationResult>> {
    let result = validate_for_publish(&item);
    tracing::debug!(
        item_id = item.id.as_deref().unwrap_or("-"),
        lease_group = %item.lease_group(),
        valid = result.valid,
        errors = result.errors.len(),
        "Publish eligibility validated"
    );
    Json(DataResponse { data: result })
}

/// POST /api/v1/rentable-items/validate/required-fields
///
/// The category comes from the request, not from the item, so clients can
/// preview the requirements of a category change.
pub async fn validate_required_fields(
    Json(body): Json<RequiredFieldsRequest>,
) -> AppResult<Json<DataResponse<ValidationResult>>> {
    if body.category.trim().is_empty() {
        return Err(AppError::BadRequest("category must not be empty".to_string()));
    }

    let result = validate_required_fields_by_type(&body.category, &body.item);
    tracing::debug!(
        category = %body.category,
        valid = result.valid,
        errors = result.errors.len(),
        "Required fields validated"
    );
    Ok(Json(DataResponse { data: result }))
}

/// POST /api/v1/rentable-items/publish-check
///
/// Returns the report with 200 when the item may be published, otherwise
/// 422 with the same report under `details`.
pub async fn publish_check(
    Json(item): Json<RentableItem>,
) -> AppResult<Json<DataResponse<PublishReport>>> {
    let report = evaluate_publish(&item);
    let item_id = item.id.as_deref().unwrap_or("-");

    if !report.publishable {
        tracing::info!(
            item_id,
            category = item.property_type.as_deref().unwrap_or("-"),
            errors = report.all_errors().len(),
            "Publish refused"
        );
        return Err(AppError::Unpublishable(report));
    }

    tracing::debug!(item_id, "Publish check passed");
    Ok(Json(DataResponse { data: report }))
}
