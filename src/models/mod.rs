/// # Health Status Response
///
/// Operational status of the service with a timestamp; the response format
/// for the health check endpoint.
pub mod health;

/// # Status Check Models
///
/// The persisted `StatusCheck` entity, the creation request body, and the
/// structured validation error payload returned on HTTP 422.
pub mod status;
