use crate::models::status::ValidationErrorBody;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

/// # Root Greeting Endpoint
///
/// Fixed greeting payload at the root of the API namespace; a liveness
/// signal that touches no state.
pub mod root;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
/// Used by external monitors; touches no state.
pub mod health;

/// # Status Check Endpoints
///
/// Creation and full listing of status-check records, backed by the injected
/// status store.
pub mod status;

/// Maps JSON body failures onto the documented error contract: schema
/// violations (missing/ill-typed fields) become 422 with a field-level body,
/// syntactically malformed JSON becomes 400.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = match &err {
        JsonPayloadError::Deserialize(de)
            if de.classify() == serde_json::error::Category::Data =>
        {
            let field = if de.to_string().contains("client_name") {
                "client_name"
            } else {
                "body"
            };
            HttpResponse::UnprocessableEntity()
                .json(ValidationErrorBody::for_field(field, &de.to_string()))
        }
        _ => HttpResponse::BadRequest().json(json!({
            "error": "MALFORMED_JSON",
            "message": err.to_string()
        })),
    };
    InternalError::from_response(err, response).into()
}

/// # API Route Configuration
///
/// Sets up all endpoints under the `/api` base path.
///
/// ## Mounted Services
/// - Root greeting (see [`root::configure_routes`])
/// - Health check (see [`health::configure_routes`])
/// - Status checks (see [`status::configure_routes`])
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/        - Greeting payload
/// GET  /api/health  - Service health status
/// POST /api/status  - Create a status check
/// GET  /api/status  - List all status checks
/// ```
///
/// [`root::configure_routes`]: crate::routes::root::configure_routes
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`status::configure_routes`]: crate::routes::status::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(root::configure_routes)
            .configure(health::configure_routes)
            .configure(status::configure_routes),
    );
}
