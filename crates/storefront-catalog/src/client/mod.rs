//! HTTP client for the commerce backend's GraphQL API.

mod endpoint;
mod paths;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use storefront_core::{
    AppConfig, CatalogPage, CatalogPageProps, ProductDetail, SortBy, CATALOG_PAGE_SIZE,
    CATEGORY_LIMIT,
};

use crate::error::CatalogError;
use crate::normalize::{normalize_categories, normalize_page, normalize_product};
use crate::query::{
    CatalogFilter, CatalogPageVariables, ProductVariables, ProductsVariables, CATALOG_PAGE_QUERY,
    PRODUCTS_QUERY, PRODUCT_QUERY,
};
use crate::types::{CatalogPageData, GraphQlResponse, ProductData, ProductsData};

/// Maximum number of pages read while enumerating product ids.
/// Prevents infinite loops on cycling cursors.
pub(super) const MAX_PAGES: usize = 200;

#[derive(Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    query: &'a str,
    variables: &'a V,
}

/// Client for the commerce backend's GraphQL endpoint.
///
/// Every operation is a single `POST` with the query and its variables.
/// Nothing is retried: a failed request surfaces as a [`CatalogError`] and
/// the caller decides what to show.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: Url,
    channel: String,
    token: Option<String>,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidEndpoint`] if `endpoint` is not an
    /// http(s) URL, or [`CatalogError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        endpoint: &str,
        channel: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let endpoint = endpoint::parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            channel: channel.to_owned(),
            token: None,
        })
    }

    /// Builds a client from the application config.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        let client = Self::new(
            &config.graphql_url,
            &config.channel,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        Ok(match &config.graphql_token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_owned());
        self
    }

    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Fetches one page of the product listing.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::GraphQl`] if the backend reports errors.
    /// - [`CatalogError::UnexpectedStatus`] for a non-2xx answer without a
    ///   GraphQL error body.
    /// - [`CatalogError::Http`] on network failure or timeout.
    /// - [`CatalogError::Deserialize`] if the body does not match the query.
    pub async fn fetch_products_page(
        &self,
        filter: &CatalogFilter,
        first: u32,
        after: Option<&str>,
    ) -> Result<CatalogPage, CatalogError> {
        let variables = ProductsVariables::new(&self.channel, first, after, filter);
        let data: ProductsData = self
            .execute("CatalogProducts", PRODUCTS_QUERY, &variables)
            .await?;
        let page = data.products.map(normalize_page).unwrap_or_default();

        tracing::debug!(
            items = page.items.len(),
            total_count = page.total_count,
            has_next_page = page.has_next_page,
            "fetched catalog page"
        );
        Ok(page)
    }

    /// First page of products matching `filter`.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::fetch_products_page`].
    pub async fn filter_products(
        &self,
        filter: &CatalogFilter,
    ) -> Result<CatalogPage, CatalogError> {
        self.fetch_products_page(filter, CATALOG_PAGE_SIZE, None)
            .await
    }

    /// Page following `end_cursor` for the same `filter`.
    ///
    /// The cursor must come from a listing with the same filter and sort; the
    /// backend scopes cursors to the query that produced them.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::fetch_products_page`].
    pub async fn load_more_products(
        &self,
        end_cursor: &str,
        filter: &CatalogFilter,
    ) -> Result<CatalogPage, CatalogError> {
        self.fetch_products_page(filter, CATALOG_PAGE_SIZE, Some(end_cursor))
            .await
    }

    /// Categories plus the first page sorted by name, in one round trip.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::fetch_products_page`].
    pub async fn fetch_catalog_page_props(&self) -> Result<CatalogPageProps, CatalogError> {
        let variables = CatalogPageVariables {
            channel: &self.channel,
            first: CATALOG_PAGE_SIZE,
            categories_first: CATEGORY_LIMIT,
            sort_by: SortBy::default(),
        };
        let data: CatalogPageData = self
            .execute("CatalogPage", CATALOG_PAGE_QUERY, &variables)
            .await?;

        let categories = data
            .categories
            .map(normalize_categories)
            .unwrap_or_default();
        let page = data.products.map(normalize_page).unwrap_or_default();

        Ok(CatalogPageProps {
            products: page.items,
            categories,
            total_products: page.total_count,
            end_cursor: page.end_cursor,
        })
    }

    /// Full detail of one product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] when the backend has no
    /// product with this id in the channel, plus the errors of
    /// [`CatalogClient::fetch_products_page`].
    pub async fn fetch_product(&self, id: &str) -> Result<ProductDetail, CatalogError> {
        let variables = ProductVariables {
            channel: &self.channel,
            id,
        };
        let data: ProductData = self
            .execute("ProductDetail", PRODUCT_QUERY, &variables)
            .await?;

        data.product
            .map(normalize_product)
            .ok_or_else(|| CatalogError::ProductNotFound { id: id.to_owned() })
    }

    /// Sends one GraphQL operation and unwraps its `data`.
    async fn execute<V, T>(
        &self,
        operation: &str,
        query: &str,
        variables: &V,
    ) -> Result<T, CatalogError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest {
            operation_name: operation,
            query,
            variables,
        };

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.inspect_err(|e| {
            tracing::warn!(
                operation,
                host = %endpoint::endpoint_host(&self.endpoint),
                error = %e,
                "GraphQL request failed"
            );
        })?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Backends report query validation failures as 400 with an
            // `errors` array; prefer that message over the bare status.
            let message = serde_json::from_str::<GraphQlResponse<serde_json::Value>>(&text)
                .ok()
                .and_then(|envelope| join_errors(&envelope));
            return Err(match message {
                Some(message) => CatalogError::GraphQl {
                    operation: operation.to_owned(),
                    message,
                },
                None => CatalogError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: self.endpoint.to_string(),
                },
            });
        }

        let envelope = serde_json::from_str::<GraphQlResponse<T>>(&text).map_err(|e| {
            CatalogError::Deserialize {
                context: format!("{operation} response"),
                source: e,
            }
        })?;

        if let Some(message) = join_errors(&envelope) {
            tracing::warn!(operation, %message, "GraphQL operation returned errors");
            return Err(CatalogError::GraphQl {
                operation: operation.to_owned(),
                message,
            });
        }

        envelope.data.ok_or_else(|| CatalogError::GraphQl {
            operation: operation.to_owned(),
            message: "response contained no data".to_owned(),
        })
    }
}

fn join_errors<T>(envelope: &GraphQlResponse<T>) -> Option<String> {
    if envelope.errors.is_empty() {
        return None;
    }
    Some(
        envelope
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; "),
    )
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
