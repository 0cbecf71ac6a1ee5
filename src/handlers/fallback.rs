use crate::error::ApiError;
use axum::http::Uri;

/// Handler for any path without a registered route
pub async fn fallback_handler(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::NotFound(uri.path().to_string())
}
