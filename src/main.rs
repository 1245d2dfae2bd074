use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use status_api::config::AppConfig;
use status_api::openapi::ApiDoc;
use status_api::store::StatusStore;
use status_api::store::memory::InMemoryStatusStore;
use status_api::store::mongo::MongoStatusStore;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Status Check Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Status check endpoints under `/api`
/// - Swagger UI for API documentation
/// - Permissive (or origin-listed) CORS on every response
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - API: `/api/`, `/api/health`, `/api/status` (configured in routes)
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0:8000` by default (`HOST`/`PORT`)
/// - Backing store selected by `MONGODB_URI`: MongoDB when set, otherwise
///   an in-memory store scoped to the process lifetime
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();

    let store: Arc<dyn StatusStore> = match &config.mongodb_uri {
        Some(uri) => {
            let store = MongoStatusStore::connect(uri, &config.db_name, &config.status_collection)
                .await
                .map_err(std::io::Error::other)?;
            log::info!(
                "using MongoDB store: database {}, collection {}",
                config.db_name,
                config.status_collection
            );
            Arc::new(store)
        }
        None => {
            log::warn!("MONGODB_URI not set, using in-memory store");
            Arc::new(InMemoryStatusStore::new())
        }
    };

    log::info!("listening on {}:{}", config.host, config.port);
    let bind_addr = (config.host.clone(), config.port);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .wrap(config.cors())
            .app_data(Data::from(store.clone()))
            .app_data(Data::new(openapi.clone()))
            .configure(status_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(bind_addr)?
    .run()
    .await
}
