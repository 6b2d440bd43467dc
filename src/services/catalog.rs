use crate::models::BreedRecord;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the breed catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// TheDogAPI client
///
/// Supplies the breed catalog consumed by the ranking pipeline:
/// - Fetching the full breed list
/// - Fetching a single breed by id
/// - Name search
pub struct DogApiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl DogApiClient {
    /// Create a new catalog client
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json(&self, url: &str) -> Result<Value, CatalogError> {
        tracing::debug!("Fetching catalog resource: {}", url);

        let response = self
            .client
            .get(url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Catalog request to {} failed: {} - {}", url, status, body);
            return Err(CatalogError::ApiError(format!("Catalog returned {}", status)));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))
    }

    /// Fetch every breed in the catalog
    pub async fn fetch_breeds(&self) -> Result<Vec<BreedRecord>, CatalogError> {
        let json = self.get_json(&self.url("breeds")).await?;
        let breeds = parse_breed_list(json)?;

        tracing::debug!("Fetched {} breeds from catalog", breeds.len());

        Ok(breeds)
    }

    /// Fetch a single breed by id
    pub async fn fetch_breed(&self, id: u32) -> Result<BreedRecord, CatalogError> {
        let json = self.get_json(&self.url(&format!("breeds/{}", id))).await?;

        // TheDogAPI answers unknown ids with `{}`
        if json.as_object().map_or(true, |obj| obj.is_empty()) {
            return Err(CatalogError::NotFound(format!("Breed {} not found", id)));
        }

        serde_json::from_value(json)
            .map_err(|e| CatalogError::InvalidResponse(format!("Failed to parse breed: {}", e)))
    }

    /// Search breeds by name
    pub async fn search_breeds(&self, name: &str) -> Result<Vec<BreedRecord>, CatalogError> {
        let url = format!("{}?q={}", self.url("breeds/search"), urlencoding::encode(name));
        let json = self.get_json(&url).await?;

        parse_breed_list(json)
    }
}

/// Parse a JSON array of breeds, skipping entries that do not deserialize
fn parse_breed_list(json: Value) -> Result<Vec<BreedRecord>, CatalogError> {
    let Value::Array(items) = json else {
        return Err(CatalogError::InvalidResponse("Expected an array of breeds".into()));
    };

    let total = items.len();
    let breeds: Vec<BreedRecord> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if breeds.len() < total {
        tracing::warn!("Skipped {} malformed breed records", total - breeds.len());
    }

    Ok(breeds)
}
