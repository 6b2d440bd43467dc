// Service exports
pub mod cache;
pub mod catalog;

pub use cache::{normalize_query, CacheError, CacheKey, CacheManager, CacheStats};
pub use catalog::{CatalogError, DogApiClient};
