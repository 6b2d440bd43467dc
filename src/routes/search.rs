use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::{Ranker, TraitExtractor};
use crate::models::{
    BreedNameRequest, BreedRecord, ConstraintSet, ErrorResponse, HealthResponse,
    ListBreedsRequest, ScoredBreed, SearchRequest, SearchResponse,
};
use crate::services::{CacheKey, CacheManager, CatalogError, DogApiClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<DogApiClient>,
    pub cache: Arc<CacheManager>,
    pub extractor: Arc<TraitExtractor>,
    pub ranker: Ranker,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Ranked search kept in cache; pages of any size are cut from it
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedSearch {
    constraints: ConstraintSet,
    results: Vec<ScoredBreed>,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/search", web::get().to(search))
        .route("/breeds", web::get().to(list_breeds))
        .route("/breeds/search", web::get().to(search_breeds_by_name))
        .route("/breeds/{id}", web::get().to(get_breed));
}

fn error_response(status: actix_web::http::StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

/// Any upstream failure, including a 404 on a collection endpoint
fn catalog_error_response(err: &CatalogError) -> HttpResponse {
    error_response(
        actix_web::http::StatusCode::BAD_GATEWAY,
        "Failed to fetch breeds",
        err.to_string(),
    )
}

/// Load the breed catalog, serving from cache when possible
async fn load_catalog(state: &AppState) -> Result<Vec<BreedRecord>, CatalogError> {
    let key = CacheKey::all_breeds();

    if let Ok(breeds) = state.cache.get::<Vec<BreedRecord>>(&key).await {
        return Ok(breeds);
    }

    let breeds = state.catalog.fetch_breeds().await?;

    if let Err(e) = state.cache.set(&key, &breeds).await {
        tracing::warn!("Failed to cache breed catalog: {}", e);
    }

    Ok(breeds)
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cache_entries: state.cache.stats().entries,
    })
}

/// Natural-language breed search
///
/// GET /api/v1/search?q=friendly+small+dogs+under+40+lbs&limit=10
async fn search(
    state: web::Data<AppState>,
    req: web::Query<SearchRequest>,
) -> impl Responder {
    use actix_web::http::StatusCode;

    let query = req.q.trim();
    if query.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Query parameter is required",
            "q must not be blank".to_string(),
        );
    }
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let limit = req.limit.unwrap_or(state.default_limit).min(state.max_limit);
    let cache_key = CacheKey::search(query);

    tracing::info!("Searching breeds: query={:?}, limit={}", query, limit);

    let (ranked, cached) = match state.cache.get::<CachedSearch>(&cache_key).await {
        Ok(hit) => (hit, true),
        Err(_) => {
            let breeds = match load_catalog(&state).await {
                Ok(breeds) => breeds,
                Err(e) => {
                    tracing::error!("Failed to load breed catalog: {}", e);
                    return catalog_error_response(&e);
                }
            };

            let constraints = state.extractor.extract(query);
            tracing::debug!("Extracted constraints: {:?}", constraints);

            let results = state.ranker.rank(&breeds, &constraints);
            let entry = CachedSearch { constraints, results };

            if let Err(e) = state.cache.set(&cache_key, &entry).await {
                tracing::warn!("Failed to cache search results: {}", e);
            }

            (entry, false)
        }
    };

    let total = ranked.results.len();
    let results: Vec<ScoredBreed> = ranked.results.into_iter().take(limit).collect();

    tracing::info!(
        "Returning {} of {} matching breeds (cached: {})",
        results.len(),
        total,
        cached
    );

    HttpResponse::Ok().json(SearchResponse {
        success: true,
        cached,
        query: query.to_string(),
        extracted_constraints: ranked.constraints,
        results,
        total,
        matched_breeds: total,
    })
}

/// List the catalog
///
/// GET /api/v1/breeds?limit=20
async fn list_breeds(
    state: web::Data<AppState>,
    req: web::Query<ListBreedsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    match load_catalog(&state).await {
        Ok(mut breeds) => {
            if let Some(limit) = req.limit {
                breeds.truncate(limit);
            }
            HttpResponse::Ok().json(breeds)
        }
        Err(e) => {
            tracing::error!("Failed to load breed catalog: {}", e);
            catalog_error_response(&e)
        }
    }
}

/// Breed name lookup, proxied to the catalog
///
/// GET /api/v1/breeds/search?name=retriever
async fn search_breeds_by_name(
    state: web::Data<AppState>,
    req: web::Query<BreedNameRequest>,
) -> impl Responder {
    let name = req.name.trim();
    if name.is_empty() || req.validate().is_err() {
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Missing name parameter",
            "name query parameter is required".to_string(),
        );
    }

    match state.catalog.search_breeds(name).await {
        Ok(breeds) => HttpResponse::Ok().json(breeds),
        Err(e) => {
            tracing::error!("Breed name search for {:?} failed: {}", name, e);
            catalog_error_response(&e)
        }
    }
}

/// Single breed details
///
/// GET /api/v1/breeds/{id}
async fn get_breed(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> impl Responder {
    let id = path.into_inner();
    let key = CacheKey::breed(id);

    if let Ok(breed) = state.cache.get::<BreedRecord>(&key).await {
        return HttpResponse::Ok().json(breed);
    }

    // The cached catalog usually has it already
    let from_catalog = state
        .cache
        .get::<Vec<BreedRecord>>(&CacheKey::all_breeds())
        .await
        .ok()
        .and_then(|breeds| breeds.into_iter().find(|b| b.id == Some(id)));

    let breed = match from_catalog {
        Some(breed) => breed,
        None => match state.catalog.fetch_breed(id).await {
            Ok(breed) => breed,
            Err(e @ CatalogError::NotFound(_)) => {
                tracing::debug!("Breed {} lookup failed: {}", id, e);
                return error_response(
                    actix_web::http::StatusCode::NOT_FOUND,
                    "Not found",
                    e.to_string(),
                );
            }
            Err(e) => {
                tracing::error!("Breed {} lookup failed: {}", id, e);
                return catalog_error_response(&e);
            }
        },
    };

    if let Err(e) = state.cache.set(&key, &breed).await {
        tracing::warn!("Failed to cache breed {}: {}", id, e);
    }

    HttpResponse::Ok().json(breed)
}
