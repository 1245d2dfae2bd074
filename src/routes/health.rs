use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
/// No state is touched, so the endpoint stays available even when the
/// backing store is unreachable.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy") and `timestamp` in
///     ISO 8601 format
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}
