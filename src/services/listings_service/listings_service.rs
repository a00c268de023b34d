use async_trait::async_trait;
use tracing::{debug, error};

use super::types::listings_service_error::ListingsServiceError;
use crate::types::raw_listing::RawListing;

/// Source of the upstream listing collection. Every call is a fresh fetch.
#[async_trait]
pub trait ListingsSource: Send + Sync {
    async fn fetch_listings(&self) -> Result<Vec<RawListing>, ListingsServiceError>;
}

#[derive(Clone)]
pub struct ListingsServiceConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct ListingsService {
    config: ListingsServiceConfig,
    client: reqwest::Client,
}

impl ListingsService {
    pub fn new(config: ListingsServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ListingsSource for ListingsService {
    async fn fetch_listings(&self) -> Result<Vec<RawListing>, ListingsServiceError> {
        debug!("Fetching listings from {}", self.config.url);

        let resp = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| ListingsServiceError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| ListingsServiceError::Status(e.to_string()))?;

        let listings = resp
            .json::<Vec<RawListing>>()
            .await
            .map_err(|e| ListingsServiceError::Decode(e.to_string()))?;

        debug!("Fetched {} listings", listings.len());

        Ok(listings)
    }
}

/// Logs the failure and renders the message shown to API clients.
pub fn describe_fetch_error(e: &ListingsServiceError) -> String {
    error!("Failed to fetch listings: {}", e);
    format!("Error al obtener datos: {}", e)
}
