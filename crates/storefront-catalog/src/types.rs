//! Wire types for the commerce backend's GraphQL responses.
//!
//! ## Observed shape
//!
//! Every response is an envelope `{"data": ..., "errors": [...]}`. Either
//! key may be missing; `errors` present means the operation failed even
//! when partial `data` comes back.
//!
//! Products are Relay connections: `{totalCount, pageInfo, edges: [{node}]}`.
//! `pageInfo.endCursor` is `null` for an empty page.
//!
//! Nullable fields seen in practice: `thumbnail` (products without media),
//! `alt` on images (sometimes `""`, sometimes `null`), `pricing` (products
//! not published in the channel), `description` and `defaultVariant`.

use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductsData {
    pub products: Option<Connection<ProductNode>>,
}

#[derive(Debug, Deserialize)]
pub struct ProductIdsData {
    pub products: Option<Connection<ProductIdNode>>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogPageData {
    pub categories: Option<Connection<CategoryNode>>,
    pub products: Option<Connection<ProductNode>>,
}

#[derive(Debug, Deserialize)]
pub struct ProductData {
    pub product: Option<ProductDetailNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "N: Deserialize<'de>"))]
pub struct Connection<N> {
    /// Absent on `categories` queries that do not select it.
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub edges: Vec<Edge<N>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
pub struct Edge<N> {
    pub node: N,
}

#[derive(Debug, Deserialize)]
pub struct ProductIdNode {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pricing: Option<ProductPricing>,
    #[serde(default)]
    pub thumbnail: Option<ImageNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
    pub price_range: Option<PriceRange>,
}

#[derive(Debug, Deserialize)]
pub struct PriceRange {
    pub start: Option<TaxedMoney>,
}

#[derive(Debug, Deserialize)]
pub struct TaxedMoney {
    pub gross: MoneyNode,
}

#[derive(Debug, Deserialize)]
pub struct MoneyNode {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageNode {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MediaNode {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailNode {
    pub id: String,
    pub name: String,
    /// JSON-encoded editor document.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_variant: Option<VariantRefNode>,
    #[serde(default)]
    pub variants: Option<Vec<VariantNode>>,
    #[serde(default)]
    pub media: Option<Vec<MediaNode>>,
}

#[derive(Debug, Deserialize)]
pub struct VariantRefNode {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct VariantNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pricing: Option<VariantPricing>,
}

#[derive(Debug, Deserialize)]
pub struct VariantPricing {
    pub price: Option<TaxedMoney>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_without_edges_deserializes_empty() {
        let data: ProductIdsData = serde_json::from_value(serde_json::json!({
            "products": {"totalCount": 0, "pageInfo": {"endCursor": null, "hasNextPage": false}}
        }))
        .expect("connection without edges");
        let products = data.products.expect("products present");
        assert!(products.edges.is_empty());
        assert_eq!(products.total_count, Some(0));
    }

    #[test]
    fn connection_of_product_nodes_deserializes() {
        let data: CatalogPageData = serde_json::from_value(serde_json::json!({
            "categories": {"edges": [{"node": {"id": "Q2F0OjE=", "name": "Bath"}}]},
            "products": null
        }))
        .expect("catalog page data");
        let categories = data.categories.expect("categories present");
        assert_eq!(categories.edges.len(), 1);
        assert!(categories.page_info.is_none());
        assert!(data.products.is_none());
    }
}
