//! Remote flavor catalog.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::CatalogConfig;
use crate::domain::{map_flavors, MenuListItem, PizzaFlavor};

use super::error::FetchError;

/// Source of catalog records.
///
/// `Ok(None)` means the endpoint answered with `null`.
#[async_trait]
pub trait FlavorSource: Send + Sync {
    async fn fetch_flavors(&self) -> Result<Option<Vec<PizzaFlavor>>, FetchError>;
}

/// Fetch the catalog and turn it into menu items.
///
/// A `null` or empty catalog is a failure, not an empty menu.
pub async fn load_menu(source: &dyn FlavorSource) -> Result<Vec<MenuListItem>, FetchError> {
    match source.fetch_flavors().await? {
        Some(flavors) if !flavors.is_empty() => Ok(map_flavors(flavors)),
        _ => Err(FetchError::EmptyCatalog),
    }
}

/// Catalog served as a JSON array over HTTP.
pub struct HttpCatalog {
    url: String,
    client: Client,
}

impl HttpCatalog {
    /// Build a client with the configured request and connect timeouts.
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;
        Ok(Self::with_client(config.flavors_url(), client))
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FlavorSource for HttpCatalog {
    async fn fetch_flavors(&self) -> Result<Option<Vec<PizzaFlavor>>, FetchError> {
        tracing::debug!(url = %self.url, "Fetching flavor catalog");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let flavors: Option<Vec<PizzaFlavor>> =
            serde_json::from_slice(&body).map_err(FetchError::Decode)?;

        tracing::info!(
            url = %self.url,
            count = flavors.as_ref().map_or(0, Vec::len),
            "Flavor catalog fetched"
        );
        Ok(flavors)
    }
}
