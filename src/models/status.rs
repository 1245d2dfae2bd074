use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// # Status Check Record
///
/// The sole persisted entity: a client-submitted label plus a server-assigned
/// id and creation timestamp.
///
/// ## Fields
/// - `id`: UUID v4 string, generated once at creation, immutable
/// - `client_name`: caller-supplied label identifying the origin of the check
/// - `timestamp`: ISO 8601 / RFC 3339 UTC creation time, set once at insert
///
/// ## Example JSON
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "client_name": "TestClient_1",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl StatusCheck {
    /// Constructs a new record with a fresh UUID and the current UTC time.
    /// The caller is responsible for validating `client_name` beforehand.
    pub fn new(client_name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// # Status Check Creation Request
///
/// Request body for `POST /api/status`.
///
/// ## Example JSON
/// ```json
/// { "client_name": "TestClient_1" }
/// ```
#[derive(Deserialize, ToSchema)]
pub struct StatusCheckRequest {
    pub client_name: String,
}

/// Single field-level validation failure.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// # Validation Error Response
///
/// Body returned with HTTP 422 when the request fails schema validation.
///
/// ## Example JSON
/// ```json
/// {
///   "detail": [
///     { "field": "client_name", "message": "field is required and must be a non-empty string" }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ValidationErrorBody {
    pub detail: Vec<FieldError>,
}

impl ValidationErrorBody {
    pub fn for_field(field: &str, message: &str) -> Self {
        Self {
            detail: vec![FieldError {
                field: field.to_string(),
                message: message.to_string(),
            }],
        }
    }
}
