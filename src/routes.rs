// Route path constants - single source of truth for all API paths

pub const LISTE: &str = "/liste";
pub const LOGIN: &str = "/login";
pub const HEALTH: &str = "/health";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
