use serde::{Deserialize, Serialize};

/// Items served by `GET /liste`, in response order
pub const LISTE_ITEMS: [&str; 3] = ["foo", "bar", "baz"];

/// Body served by `GET /login`
pub const LOGIN_BODY: &str = "login";

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
