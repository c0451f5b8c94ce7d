//! Route definitions for the `/rentable-items` validation endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::rentable_items;
use crate::state::AppState;

/// Routes mounted at `/rentable-items`.
///
/// ```text
/// POST   /validate/metadata         -> validate_metadata (?strict=true rejects)
/// POST   /validate/publish          -> validate_publish
/// POST   /validate/required-fields  -> validate_required_fields
/// POST   /publish-check             -> publish_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate/metadata", post(rentable_items::validate_metadata))
        .route("/validate/publish", post(rentable_items::validate_publish))
        .route(
            "/validate/required-fields",
            post(rentable_items::validate_required_fields),
        )
        .route("/publish-check", post(rentable_items::publish_check))
}
