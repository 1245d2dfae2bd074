use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros.
///
/// # Endpoints
/// - Root Greeting: `GET /api/`
/// - Health Check: `GET /api/health`
/// - Create Status Check: `POST /api/status`
/// - List Status Checks: `GET /api/status`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
/// - `StatusCheck`: Persisted status-check record
/// - `StatusCheckRequest`: Creation request body
/// - `ValidationErrorBody` / `FieldError`: 422 error payload
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::health::health,
        crate::routes::status::create_status_check,
        crate::routes::status::list_status_checks,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::status::StatusCheck,
            crate::models::status::StatusCheckRequest,
            crate::models::status::ValidationErrorBody,
            crate::models::status::FieldError
        )
    ),
    tags(
        (name = "Root", description = "API namespace greeting"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Status Checks", description = "Status check creation and listing")
    ),
    info(
        description = "Minimal status-check service: clients submit a label, the service persists and lists timestamped records",
        title = "Status Check API",
        version = "0.3.0",
    )
)]
pub struct ApiDoc;
