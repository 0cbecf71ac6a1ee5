use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::HealthResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "jimnotes-back API",
        version = "0.1.0",
        description = "Backend endpoints for jimnotes"
    ),
    paths(
        handlers::health::health_handler,
        handlers::liste::liste_handler,
        handlers::login::login_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "liste", description = "Item list"),
        (name = "login", description = "Login placeholder, performs no authentication")
    )
)]
pub struct ApiDoc;
