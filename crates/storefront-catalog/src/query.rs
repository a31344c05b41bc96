//! GraphQL documents sent to the commerce backend, and their variables.
//!
//! Filter values always travel as variables; nothing user-supplied is
//! spliced into query text.

use serde::Serialize;
use storefront_core::SortBy;

pub(crate) const PRODUCTS_QUERY: &str = r"
query CatalogProducts(
  $channel: String!
  $first: Int!
  $after: String
  $filter: ProductFilterInput
  $sortBy: ProductOrder
) {
  products(channel: $channel, first: $first, after: $after, filter: $filter, sortBy: $sortBy) {
    totalCount
    pageInfo {
      endCursor
      hasNextPage
    }
    edges {
      node {
        id
        name
        pricing {
          priceRange {
            start {
              gross {
                amount
                currency
              }
            }
          }
        }
        thumbnail(size: 250) {
          url
          alt
        }
      }
    }
  }
}
";

pub(crate) const PRODUCT_IDS_QUERY: &str = r"
query ProductIds($channel: String!, $first: Int!, $after: String) {
  products(channel: $channel, first: $first, after: $after) {
    totalCount
    pageInfo {
      endCursor
      hasNextPage
    }
    edges {
      node {
        id
      }
    }
  }
}
";

pub(crate) const CATALOG_PAGE_QUERY: &str = r"
query CatalogPage(
  $channel: String!
  $first: Int!
  $categoriesFirst: Int!
  $sortBy: ProductOrder
) {
  categories(first: $categoriesFirst) {
    edges {
      node {
        id
        name
      }
    }
  }
  products(channel: $channel, first: $first, sortBy: $sortBy) {
    totalCount
    pageInfo {
      endCursor
      hasNextPage
    }
    edges {
      node {
        id
        name
        pricing {
          priceRange {
            start {
              gross {
                amount
                currency
              }
            }
          }
        }
        thumbnail(size: 250) {
          url
          alt
        }
      }
    }
  }
}
";

pub(crate) const PRODUCT_QUERY: &str = r"
query ProductDetail($channel: String!, $id: ID!) {
  product(channel: $channel, id: $id) {
    id
    name
    description
    defaultVariant {
      id
      name
    }
    variants {
      id
      name
      pricing {
        price {
          gross {
            amount
            currency
          }
        }
      }
    }
    media {
      id
      url
      alt
    }
  }
}
";

/// Search, category and sort constraints of a catalog listing.
///
/// Empty strings mean "no constraint". The search text is applied as given;
/// callers decide whether short input counts as a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: Option<String>,
    pub category_id: Option<String>,
    pub sort_by: SortBy,
}

impl CatalogFilter {
    #[must_use]
    pub fn new(search: Option<&str>, category_id: Option<&str>, sort_by: SortBy) -> Self {
        let non_empty = |s: Option<&str>| s.filter(|v| !v.is_empty()).map(str::to_owned);
        Self {
            search: non_empty(search),
            category_id: non_empty(category_id),
            sort_by,
        }
    }

    fn filter_input(&self) -> Option<ProductFilterInput> {
        if self.search.is_none() && self.category_id.is_none() {
            return None;
        }
        Some(ProductFilterInput {
            search: self.search.clone(),
            categories: self.category_id.clone().map(|id| vec![id]),
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductFilterInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductsVariables<'a> {
    channel: &'a str,
    first: u32,
    after: Option<&'a str>,
    filter: Option<ProductFilterInput>,
    sort_by: SortBy,
}

impl<'a> ProductsVariables<'a> {
    pub(crate) fn new(
        channel: &'a str,
        first: u32,
        after: Option<&'a str>,
        filter: &CatalogFilter,
    ) -> Self {
        Self {
            channel,
            first,
            after,
            filter: filter.filter_input(),
            sort_by: filter.sort_by,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductIdsVariables<'a> {
    pub channel: &'a str,
    pub first: u32,
    pub after: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogPageVariables<'a> {
    pub channel: &'a str,
    pub first: u32,
    pub categories_first: u32,
    pub sort_by: SortBy,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductVariables<'a> {
    pub channel: &'a str,
    pub id: &'a str,
}
