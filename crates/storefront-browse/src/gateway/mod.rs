//! Transport seam between a browse session and the catalog endpoints.

mod http;

use async_trait::async_trait;
use storefront_core::{FilterProductsRequest, LoadMoreProductsRequest, ProductSummary};
use thiserror::Error;

pub use http::HttpGateway;

/// First page of a new listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult {
    pub items: Vec<ProductSummary>,
    pub total_count: usize,
    pub end_cursor: Option<String>,
}

/// Page appended by "load more".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadMoreResult {
    pub items: Vec<ProductSummary>,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The endpoint answered with an `error` message.
    #[error("{0}")]
    Backend(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// The `FilterProducts` / `LoadMoreProducts` pair.
///
/// Implemented over HTTP by [`HttpGateway`]; tests substitute in-memory
/// catalogs.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn filter(&self, request: &FilterProductsRequest) -> Result<FilterResult, GatewayError>;

    async fn load_more(
        &self,
        request: &LoadMoreProductsRequest,
    ) -> Result<LoadMoreResult, GatewayError>;
}

#[async_trait]
impl<G: CatalogGateway + ?Sized> CatalogGateway for std::sync::Arc<G> {
    async fn filter(&self, request: &FilterProductsRequest) -> Result<FilterResult, GatewayError> {
        (**self).filter(request).await
    }

    async fn load_more(
        &self,
        request: &LoadMoreProductsRequest,
    ) -> Result<LoadMoreResult, GatewayError> {
        (**self).load_more(request).await
    }
}
