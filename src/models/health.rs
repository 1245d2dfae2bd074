use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for the health check endpoint and consumed
/// by external monitors.
///
/// ## Fields
/// - `status`: String indicating service availability ("healthy")
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
