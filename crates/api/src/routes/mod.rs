pub mod categories;
pub mod health;
pub mod rentable_items;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                  list catalog
/// /categories/{code}/rules                     rule descriptor
/// /categories/{code}/metadata-template         seed metadata document
///
/// /rentable-items/validate/metadata            metadata check (POST)
/// /rentable-items/validate/publish             publish-eligibility check (POST)
/// /rentable-items/validate/required-fields     per-category fields check (POST)
/// /rentable-items/publish-check                combined publish gate (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/rentable-items", rentable_items::router())
}
