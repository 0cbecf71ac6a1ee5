use crate::models::LISTE_ITEMS;
use crate::routes;
use axum::Json;

/// GET /liste handler - Fixed list of items
///
/// Always returns `["foo","bar","baz"]` in that order. Query parameters and
/// headers are ignored.
#[utoipa::path(
    get,
    path = routes::LISTE,
    responses(
        (status = 200, description = "The fixed item list", body = [String])
    ),
    tag = "liste"
)]
pub async fn liste_handler() -> Json<[&'static str; 3]> {
    tracing::debug!("Serving {} liste items", LISTE_ITEMS.len());
    Json(LISTE_ITEMS)
}
