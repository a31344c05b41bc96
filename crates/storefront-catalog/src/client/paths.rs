//! Product id enumeration for statically generated detail routes.

use storefront_core::PATHS_PAGE_SIZE;

use crate::error::CatalogError;
use crate::pagination::{IdPage, PathCollector};
use crate::query::{ProductIdsVariables, PRODUCT_IDS_QUERY};
use crate::types::ProductIdsData;

use super::CatalogClient;
use super::MAX_PAGES;

impl CatalogClient {
    /// Fetches one page of product ids.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::fetch_products_page`]. A null `products` or a
    /// missing `pageInfo` is [`CatalogError::IncompleteResponse`].
    pub async fn fetch_product_ids_page(
        &self,
        first: u32,
        after: Option<&str>,
    ) -> Result<IdPage, CatalogError> {
        let variables = ProductIdsVariables {
            channel: self.channel(),
            first,
            after,
        };
        let data: ProductIdsData = self
            .execute("ProductIds", PRODUCT_IDS_QUERY, &variables)
            .await?;

        let connection = data.products.ok_or(CatalogError::IncompleteResponse {
            operation: "ProductIds",
            field: "products",
        })?;
        let page_info = connection
            .page_info
            .ok_or(CatalogError::IncompleteResponse {
                operation: "ProductIds",
                field: "products.pageInfo",
            })?;
        let (end_cursor, has_next_page) = (page_info.end_cursor, page_info.has_next_page);

        Ok(IdPage {
            ids: connection.edges.into_iter().map(|e| e.node.id).collect(),
            total_count: connection
                .total_count
                .map_or(0, |n| usize::try_from(n).unwrap_or(0)),
            end_cursor,
            has_next_page,
        })
    }

    /// Enumerates every product id in the channel, 100 per request, in
    /// backend order.
    ///
    /// **All-or-nothing semantics**: on any page failure the ids collected so
    /// far are discarded and the error is returned. A static build must not
    /// publish a partial route list.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_product_ids_page`] and from
    /// [`PathCollector::push_page`]. Returns [`CatalogError::PaginationLimit`]
    /// if the number of pages exceeds [`MAX_PAGES`].
    pub async fn enumerate_product_ids(&self) -> Result<Vec<String>, CatalogError> {
        let mut collector = PathCollector::new();
        let mut cursor: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(CatalogError::PaginationLimit {
                    operation: "ProductIds",
                    max_pages: MAX_PAGES,
                });
            }

            let page = self
                .fetch_product_ids_page(PATHS_PAGE_SIZE, cursor.as_deref())
                .await?;

            cursor = collector.push_page(page)?;
            if cursor.is_none() {
                break;
            }
        }

        tracing::info!(
            pages = page_count,
            products = collector.len(),
            total_count = collector.reported_total(),
            "enumerated product ids"
        );
        Ok(collector.into_ids())
    }
}
