use crate::models::status::{StatusCheck, StatusCheckRequest, ValidationErrorBody};
use crate::store::{StatusStore, StoreError};
use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

/// # Status Check Creation Endpoint
///
/// Persists a new status-check record for the calling client. The server
/// assigns the id and timestamp; the caller supplies only its label.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `client_name` field (non-empty string)
///
/// ## Responses
/// - **200 OK**: Record created; body is the full [`StatusCheck`]
/// - **422 Unprocessable Entity**: `client_name` missing, ill-typed, or
///   empty; body is a field-level [`ValidationErrorBody`]; no record created
/// - **400 Bad Request**: Malformed JSON body
/// - **500 Internal Server Error**: Backing store unreachable
///
/// ## Example Request
/// ```json
/// { "client_name": "TestClient_1" }
/// ```
///
/// ## Example Success Response
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "client_name": "TestClient_1",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = StatusCheckRequest,
    responses(
        (status = 200, description = "Status check created", body = StatusCheck),
        (status = 422, description = "Missing or empty client_name", body = ValidationErrorBody),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Backing store unreachable")
    ),
    tag = "Status Checks"
)]
#[post("/status")]
pub async fn create_status_check(
    req: web::Json<StatusCheckRequest>,
    store: web::Data<dyn StatusStore>,
) -> Result<impl Responder, actix_web::Error> {
    match store.create(&req.client_name).await {
        Ok(record) => Ok(HttpResponse::Ok().json(record)),
        Err(StoreError::Validation { field, message }) => Ok(
            HttpResponse::UnprocessableEntity().json(ValidationErrorBody::for_field(field, &message))
        ),
        Err(err) => {
            log::error!("status check creation failed: {err}");
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "STORE_ERROR",
                "message": "backing store unavailable"
            })))
        }
    }
}

/// # Status Check Listing Endpoint
///
/// Returns every stored status-check record in insertion order. No
/// filtering, no pagination; an empty store yields an empty array.
///
/// ## Responses
/// - **200 OK**: JSON array of [`StatusCheck`] records
/// - **500 Internal Server Error**: Backing store unreachable
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "All status checks, insertion order", body = [StatusCheck]),
        (status = 500, description = "Backing store unreachable")
    ),
    tag = "Status Checks"
)]
#[get("/status")]
pub async fn list_status_checks(
    store: web::Data<dyn StatusStore>,
) -> Result<impl Responder, actix_web::Error> {
    match store.list_all().await {
        Ok(records) => Ok(HttpResponse::Ok().json(records)),
        Err(err) => {
            log::error!("status check listing failed: {err}");
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "STORE_ERROR",
                "message": "backing store unavailable"
            })))
        }
    }
}

/// Configures status check routes under /api
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_status_check).service(list_status_checks);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::MockStatusStore;
    use crate::store::memory::InMemoryStatusStore;
    use actix_web::http::Method;
    use actix_web::{App, test};
    use serde_json::json;
    use std::sync::Arc;
    use uuid::Uuid;

    // Helper function to create a test app around a given store
    async fn create_test_app(
        store: Arc<dyn StatusStore>,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .configure(crate::routes::configure),
        )
        .await
    }

    fn permissive_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            mongodb_uri: None,
            db_name: "status_api".to_string(),
            status_collection: "status_checks".to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }

    #[actix_web::test]
    async fn test_create_then_list_round_trip() {
        let store: Arc<dyn StatusStore> = Arc::new(InMemoryStatusStore::new());
        let app = create_test_app(store).await;

        let req = test::TestRequest::post()
            .uri("/api/status")
            .set_json(json!({ "client_name": "TestClient_1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = test::read_body(resp).await;
        let created: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(created["client_name"], "TestClient_1");
        assert!(Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
        assert!(created["timestamp"].is_string());

        // The listing must include the exact record just created
        let req = test::TestRequest::get().uri("/api/status").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = test::read_body(resp).await;
        let listed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let records = listed.as_array().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0], created);
    }

    #[actix_web::test]
    async fn test_list_on_empty_store_returns_empty_array() {
        let store: Arc<dyn StatusStore> = Arc::new(InMemoryStatusStore::new());
        let app = create_test_app(store).await;

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = test::read_body(resp).await;
        let listed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed, json!([]));
    }

    #[actix_web::test]
    async fn test_missing_client_name_returns_422_and_creates_nothing() {
        let store = Arc::new(InMemoryStatusStore::new());
        let app = create_test_app(store.clone()).await;

        let req = test::TestRequest::post()
            .uri("/api/status")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 422);

        let body = test::read_body(resp).await;
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json["detail"][0]["field"], "client_name");

        // Store size unchanged
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_empty_client_name_returns_422_and_creates_nothing() {
        let store = Arc::new(InMemoryStatusStore::new());
        let app = create_test_app(store.clone()).await;

        let req = test::TestRequest::post()
            .uri("/api/status")
            .set_json(json!({ "client_name": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 422);

        let body = test::read_body(resp).await;
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json["detail"][0]["field"], "client_name");

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_non_string_client_name_returns_422() {
        let store: Arc<dyn StatusStore> = Arc::new(InMemoryStatusStore::new());
        let app = create_test_app(store).await;

        let req = test::TestRequest::post()
            .uri("/api/status")
            .set_json(json!({ "client_name": 42 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 422);
    }

    #[actix_web::test]
    async fn test_malformed_json_returns_400() {
        let store: Arc<dyn StatusStore> = Arc::new(InMemoryStatusStore::new());
        let app = create_test_app(store).await;

        let req = test::TestRequest::post()
            .uri("/api/status")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"client_name": "TestClient_1""#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_sequential_creates_return_distinct_ids() {
        let store: Arc<dyn StatusStore> = Arc::new(InMemoryStatusStore::new());
        let app = create_test_app(store).await;

        let mut ids = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/status")
                .set_json(json!({ "client_name": "TestClient_1" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 200);

            let body = test::read_body(resp).await;
            let created: serde_json::Value = serde_json::from_slice(&body).unwrap();
            ids.push(created["id"].as_str().unwrap().to_string());
        }

        assert_ne!(ids[0], ids[1]);
    }

    #[actix_web::test]
    async fn test_store_backend_failure_returns_500() {
        let mut mock = MockStatusStore::new();
        mock.expect_list_all()
            .returning(|| Err(StoreError::Backend(mongodb::error::Error::custom("connection refused"))));

        let store: Arc<dyn StatusStore> = Arc::new(mock);
        let app = create_test_app(store).await;

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);

        let body = test::read_body(resp).await;
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json["error"], "STORE_ERROR");
    }

    #[actix_web::test]
    async fn test_preflight_carries_cors_headers() {
        let store: Arc<dyn StatusStore> = Arc::new(InMemoryStatusStore::new());
        let app = test::init_service(
            App::new()
                .wrap(permissive_config().cors())
                .app_data(web::Data::from(store))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/status")
            .insert_header(("Origin", "https://example.com"))
            .insert_header(("Access-Control-Request-Method", "POST"))
            .insert_header(("Access-Control-Request-Headers", "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let allow_origin = resp
            .headers()
            .get("access-control-allow-origin")
            .expect("preflight response should carry Access-Control-Allow-Origin");
        assert!(!allow_origin.is_empty());
    }

    #[actix_web::test]
    async fn test_regular_response_carries_cors_headers() {
        let store: Arc<dyn StatusStore> = Arc::new(InMemoryStatusStore::new());
        let app = test::init_service(
            App::new()
                .wrap(permissive_config().cors())
                .app_data(web::Data::from(store))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/status")
            .insert_header(("Origin", "https://example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp.headers().get("access-control-allow-origin").is_some());
    }
}
