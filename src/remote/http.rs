//! HTTP client for the remote shop listing.

use async_trait::async_trait;
use reqwest::Client;

use crate::remote::catalog::{RemoteCatalog, RemoteCatalogError, RemoteShopRecord};

/// Configuration for the shop listing endpoint.
#[derive(Debug, Clone)]
pub struct RemoteCatalogConfig {
    /// Listing server address, e.g. `"https://api.example.com"`.
    pub base_url: String,
}

/// HTTP implementation of [`RemoteCatalog`], fetching a JSON array of shop
/// records from `{base_url}/shops`.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    config: RemoteCatalogConfig,
    http: Client,
}

impl HttpCatalogClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: RemoteCatalogConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl RemoteCatalog for HttpCatalogClient {
    async fn fetch_shops(&self) -> Result<Vec<RemoteShopRecord>, RemoteCatalogError> {
        let url = format!("{}/shops", self.config.base_url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(RemoteCatalogError::UnexpectedResponse(format!(
                "shop listing request failed with status {status}: {text}"
            )));
        }

        let records: Vec<RemoteShopRecord> = response.json().await?;

        Ok(records)
    }
}
