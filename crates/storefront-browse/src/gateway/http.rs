use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use storefront_core::{
    FilterProductsRequest, FilterProductsResponse, LoadMoreProductsRequest,
    LoadMoreProductsResponse,
};

use super::{CatalogGateway, FilterResult, GatewayError, LoadMoreResult};

/// Calls the storefront server's `/api/FilterProducts` and
/// `/api/LoadMoreProducts` endpoints.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Creates a gateway for the server at `base_url`, e.g.
    /// `http://localhost:3000`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidBaseUrl`] if `base_url` is not an
    /// http(s) URL, or [`GatewayError::Http`] if the `reqwest::Client` cannot
    /// be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, GatewayError> {
        let mut parsed = Url::parse(base_url).map_err(|e| GatewayError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        // `Url::join` replaces the last segment unless the path ends in '/'.
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<(R, u16, Url), GatewayError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| GatewayError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let response = self.client.post(url.clone()).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        match serde_json::from_str::<R>(&text) {
            Ok(parsed) => Ok((parsed, status, url)),
            Err(_) if !(200..300).contains(&status) => Err(GatewayError::UnexpectedStatus {
                status,
                url: url.to_string(),
            }),
            Err(source) => Err(GatewayError::Deserialize {
                context: format!("{endpoint} response"),
                source,
            }),
        }
    }
}

/// A response is a failure when it names a non-empty error, whatever the
/// status.
fn check(error: Option<String>, status: u16, url: &Url) -> Result<(), GatewayError> {
    if let Some(message) = error.filter(|m| !m.is_empty()) {
        return Err(GatewayError::Backend(message));
    }
    if !(200..300).contains(&status) {
        return Err(GatewayError::UnexpectedStatus {
            status,
            url: url.to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl CatalogGateway for HttpGateway {
    async fn filter(&self, request: &FilterProductsRequest) -> Result<FilterResult, GatewayError> {
        let (response, status, url): (FilterProductsResponse, u16, Url) =
            self.post("api/FilterProducts", request).await?;
        check(response.error, status, &url)?;

        tracing::debug!(
            items = response.new_products.len(),
            total = response.total_products,
            "filtered products"
        );
        Ok(FilterResult {
            items: response.new_products,
            total_count: response.total_products,
            end_cursor: response.updated_end_cursor,
        })
    }

    async fn load_more(
        &self,
        request: &LoadMoreProductsRequest,
    ) -> Result<LoadMoreResult, GatewayError> {
        let (response, status, url): (LoadMoreProductsResponse, u16, Url) =
            self.post("api/LoadMoreProducts", request).await?;
        check(response.error, status, &url)?;

        Ok(LoadMoreResult {
            items: response.more_products,
            end_cursor: response.updated_end_cursor,
        })
    }
}
