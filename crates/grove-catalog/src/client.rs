//! HTTP client for the remote plant catalog API.

use std::time::Duration;

use reqwest::Client;

use crate::envelope::{self, RawCategory, RawItem};
use crate::error::CatalogError;

/// Client for the catalog endpoint family (`/plants`, `/category/{id}`,
/// `/categories`, `/plant/{id}`).
///
/// Each call is a single attempt — the upstream storefront never retries,
/// and this layer keeps that behavior; resilience lives in the feed's
/// fallback, not here. The constructor-configured timeout still applies so
/// a dead network cannot hang the caller indefinitely.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client with the configured timeout and `User-Agent`.
    ///
    /// `base_url` is the API root (e.g.
    /// `https://openapi.programming-hero.com/api`); trailing slashes are
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /plants` — the full catalog, envelope-erased but not yet
    /// normalized.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] — network or TLS failure, or timeout.
    /// - [`CatalogError::UnexpectedStatus`] — any non-2xx status.
    /// - [`CatalogError::Deserialize`] — body is not JSON.
    /// - [`CatalogError::ShapeMismatch`] — JSON with no known envelope.
    pub async fn fetch_catalog(&self) -> Result<Vec<RawItem>, CatalogError> {
        let url = format!("{}/plants", self.base_url);
        let body = self.get_body(&url).await?;
        envelope::parse_list(&body, &url)
    }

    /// `GET /category/{id}` — a server-filtered catalog slice. Same envelope
    /// shapes and errors as [`Self::fetch_catalog`].
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_catalog`].
    pub async fn fetch_category(&self, category_id: &str) -> Result<Vec<RawItem>, CatalogError> {
        let url = format!("{}/category/{category_id}", self.base_url);
        let body = self.get_body(&url).await?;
        envelope::parse_list(&body, &url)
    }

    /// `GET /categories` — the server's category list.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_catalog`].
    pub async fn fetch_categories(&self) -> Result<Vec<RawCategory>, CatalogError> {
        let url = format!("{}/categories", self.base_url);
        let body = self.get_body(&url).await?;
        envelope::parse_categories(&body, &url)
    }

    /// `GET /plant/{id}` — a single item through the detail envelope.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_catalog`].
    pub async fn fetch_item(&self, item_id: &str) -> Result<RawItem, CatalogError> {
        let url = format!("{}/plant/{item_id}", self.base_url);
        let body = self.get_body(&url).await?;
        envelope::parse_detail(&body, &url)
    }

    async fn get_body(&self, url: &str) -> Result<String, CatalogError> {
        tracing::debug!(url, "fetching");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
