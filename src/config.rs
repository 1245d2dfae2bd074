use actix_cors::Cors;
use std::env;

/// # Application Configuration
///
/// Collected from environment variables (loaded from a `.env` file when
/// present), with defaults suitable for local development.
///
/// ## Variables
/// - `HOST`: listen address (default `0.0.0.0`)
/// - `PORT`: listen port (default `8000`)
/// - `MONGODB_URI`: MongoDB connection string; when unset the service falls
///   back to the in-memory store
/// - `DB_NAME`: database name (default `status_api`)
/// - `DB_STATUS_COLLECTION`: collection holding status checks
///   (default `status_checks`)
/// - `CORS_ORIGINS`: comma-separated allowed origins; `*` (the default)
///   permits any origin
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: Option<String>,
    pub db_name: String,
    pub status_collection: String,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8000);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            mongodb_uri: env::var("MONGODB_URI").ok().filter(|uri| !uri.is_empty()),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "status_api".to_string()),
            status_collection: env::var("DB_STATUS_COLLECTION")
                .unwrap_or_else(|_| "status_checks".to_string()),
            cors_origins: parse_origins(&env::var("CORS_ORIGINS").unwrap_or_default()),
        }
    }

    /// Builds the CORS middleware for this configuration. A `*` entry (or an
    /// empty list) permits any origin; otherwise only the listed origins are
    /// allowed. All methods and headers are accepted either way, and the
    /// headers are attached to every response, preflight and errors included.
    pub fn cors(&self) -> Cors {
        let mut cors = Cors::default().allow_any_method().allow_any_header();
        if self.cors_origins.iter().any(|origin| origin == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &self.cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }
        cors
    }
}

/// Splits a comma-separated origin list, trimming entries and dropping empty
/// ones. An empty input yields the permissive `["*"]`.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}
