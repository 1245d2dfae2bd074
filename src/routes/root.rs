use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

/// # Root Greeting Endpoint
///
/// Returns a fixed greeting payload at the root of the API namespace. Serves
/// as a liveness signal for the `/api` prefix; no state is touched.
///
/// ## Response
///
/// - **200 OK**: `{"message": "Hello World"}`
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Greeting payload")
    ),
    tag = "Root"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Hello World" }))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(root);
}
