//! Wire format of the `FilterProducts` and `LoadMoreProducts` endpoints.
//!
//! Shared by the server that hosts the endpoints and by the browse session
//! that calls them.

use serde::{Deserialize, Serialize};

use crate::catalog::{ProductSummary, SortBy};

/// `sortBy` as sent by clients.
///
/// The catalog page posts the whole sort option it has selected
/// (`{friendlyName, sorting: {field, direction}}`); other callers send the
/// bare pair. Both shapes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortInput {
    Pair(SortBy),
    Option { sorting: SortBy },
}

impl SortInput {
    #[must_use]
    pub fn sort_by(self) -> SortBy {
        match self {
            Self::Pair(sort_by) | Self::Option { sorting: sort_by } => sort_by,
        }
    }
}

impl From<SortBy> for SortInput {
    fn from(sort_by: SortBy) -> Self {
        Self::Pair(sort_by)
    }
}

/// Body of `POST /api/FilterProducts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterProductsRequest {
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    pub sort_by: SortInput,
}

/// Body of `POST /api/LoadMoreProducts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadMoreProductsRequest {
    pub end_cursor: String,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    pub sort_by: SortInput,
}

/// Answer of `FilterProducts`. A failed call carries only `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterProductsResponse {
    #[serde(default)]
    pub new_products: Vec<ProductSummary>,
    #[serde(default)]
    pub total_products: usize,
    #[serde(default)]
    pub updated_end_cursor: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Answer of `LoadMoreProducts`. A failed call carries only `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadMoreProductsResponse {
    #[serde(default)]
    pub more_products: Vec<ProductSummary>,
    #[serde(default)]
    pub updated_end_cursor: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SORT_OPTIONS;

    #[test]
    fn accepts_bare_sort_pair() {
        let req: FilterProductsRequest = serde_json::from_str(
            r#"{"searchQuery":"soap","categoryId":"","sortBy":{"field":"NAME","direction":"DESC"}}"#,
        )
        .unwrap();
        assert_eq!(req.sort_by.sort_by(), SORT_OPTIONS[1].sort_by);
        assert_eq!(req.search_query.as_deref(), Some("soap"));
    }

    #[test]
    fn accepts_full_sort_option() {
        let req: LoadMoreProductsRequest = serde_json::from_str(
            r#"{
                "endCursor": "YXJyYXljb25uZWN0aW9uOjE5",
                "searchQuery": "",
                "categoryId": "Q2F0ZWdvcnk6MQ==",
                "sortBy": {"friendlyName": "What's new?",
                           "sorting": {"field": "PUBLICATION_DATE", "direction": "DESC"}}
            }"#,
        )
        .unwrap();
        assert_eq!(req.sort_by.sort_by(), SORT_OPTIONS[4].sort_by);
        assert_eq!(req.end_cursor, "YXJyYXljb25uZWN0aW9uOjE5");
    }

    #[test]
    fn missing_sort_is_rejected() {
        let err = serde_json::from_str::<FilterProductsRequest>(r#"{"searchQuery":"soap"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let err = serde_json::from_str::<FilterProductsRequest>(
            r#"{"sortBy":{"field":"RATING","direction":"ASC"}}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn error_only_body_parses() {
        let resp: FilterProductsResponse =
            serde_json::from_str(r#"{"error":"upstream timeout"}"#).unwrap();
        assert_eq!(resp.error.as_deref(), Some("upstream timeout"));
        assert!(resp.new_products.is_empty());
    }

    #[test]
    fn success_body_carries_null_error() {
        let json = serde_json::to_value(LoadMoreProductsResponse::default()).unwrap();
        assert!(json["error"].is_null());
        assert!(json["moreProducts"].as_array().unwrap().is_empty());
    }
}
