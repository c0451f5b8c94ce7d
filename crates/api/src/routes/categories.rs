//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /                          -> list_categories
/// GET    /{code}/rules              -> get_rules
/// GET    /{code}/metadata-template  -> metadata_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_categories))
        .route("/{code}/rules", get(categories::get_rules))
        .route("/{code}/metadata-template", get(categories::metadata_template))
}
