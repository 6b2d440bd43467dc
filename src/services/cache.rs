use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-process response cache
///
/// Values are stored as JSON bytes in a moka cache with a fixed time-to-live.
/// Handlers get the cache through application state; the matching core never
/// sees it.
pub struct CacheManager {
    cache: moka::future::Cache<String, Vec<u8>>,
    ttl_secs: u64,
}

impl CacheManager {
    /// Create a new cache manager
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache, ttl_secs }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Get a value from cache
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        match self.cache.get(key).await {
            Some(bytes) => {
                tracing::trace!("Cache hit: {}", key);
                Ok(serde_json::from_slice(&bytes)?)
            }
            None => {
                tracing::trace!("Cache miss: {}", key);
                Err(CacheError::CacheMiss(key.to_string()))
            }
        }
    }

    /// Set a value in cache
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.cache.insert(key.to_string(), bytes).await;

        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    /// Delete a single entry
    pub async fn delete(&self, key: &str) {
        self.cache.invalidate(key).await;
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.cache.invalidate_all();
        tracing::debug!("Cache cleared");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Key for the full breed catalog
    pub fn all_breeds() -> String {
        "all_breeds".to_string()
    }

    /// Key for a search, normalized so equivalent queries share an entry
    pub fn search(query: &str) -> String {
        format!("search:{}", normalize_query(query))
    }

    /// Key for a single breed
    pub fn breed(id: u32) -> String {
        format!("breed:{}", id)
    }
}

/// Trim, lower-case and collapse internal whitespace
pub fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
