use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::handlers;
use crate::routes;

/// Build the application router with every route, the fallback and the
/// HTTP trace layer.
pub fn router(config: &Config) -> Router {
    let mut app = Router::new()
        .route(routes::LISTE, get(handlers::liste_handler))
        .route(routes::LOGIN, get(handlers::login_handler))
        .route(routes::HEALTH, get(handlers::health_handler));

    if config.swagger_ui_enabled {
        app = app.merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()));
    }

    app.fallback(handlers::fallback_handler)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
