use crate::models::LOGIN_BODY;
use crate::routes;

/// GET /login handler
///
/// Returns the literal `login` as plain text. No credentials are read or
/// checked and no session is created.
#[utoipa::path(
    get,
    path = routes::LOGIN,
    responses(
        (status = 200, description = "Fixed login body", body = String, content_type = "text/plain")
    ),
    tag = "login"
)]
pub async fn login_handler() -> &'static str {
    tracing::debug!("Serving login");
    LOGIN_BODY
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        Router::new().route(routes::LOGIN, get(login_handler))
    }

    #[tokio::test]
    async fn test_login_endpoint() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/login")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"login");
    }

    #[tokio::test]
    async fn test_login_ignores_credentials() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/login?user=x&pass=y")
                    .header("authorization", "Basic eDp5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"login");
    }
}
