use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use breed_finder::config::Settings;
use breed_finder::core::{Ranker, TraitExtractor, Vocabulary};
use breed_finder::routes::{self, search::AppState};
use breed_finder::services::{CacheManager, DogApiClient};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle query string errors (e.g. `limit=abc`)
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle path parameter errors (e.g. `/breeds/abc`)
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting breed finder search service...");

    let catalog = match DogApiClient::new(
        settings.catalog.base_url.clone(),
        settings.catalog.api_key.clone(),
        settings.catalog.timeout_secs,
    ) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to build catalog client: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };

    if settings.catalog.api_key.is_empty() {
        tracing::warn!("No catalog API key configured; TheDogAPI may rate-limit requests");
    }

    info!("Catalog client initialized ({})", settings.catalog.base_url);

    let cache = Arc::new(CacheManager::new(settings.cache.capacity, settings.cache.ttl_secs));

    info!(
        "Cache initialized ({} entries, TTL: {}s)",
        settings.cache.capacity, settings.cache.ttl_secs
    );

    let vocabulary = Vocabulary::default()
        .with_extra_temperaments(&settings.search.extra_temperaments);

    info!("Vocabulary loaded with {} temperament tags", vocabulary.temperaments().len());

    // Build application state
    let app_state = AppState {
        catalog,
        cache,
        extractor: Arc::new(TraitExtractor::new(vocabulary)),
        ranker: Ranker::default(),
        default_limit: settings.search.default_limit,
        max_limit: settings.search.max_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
