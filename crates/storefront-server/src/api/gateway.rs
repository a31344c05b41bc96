//! `FilterProducts` and `LoadMoreProducts`.
//!
//! Bodies are read as text and parsed here: the catalog page posts JSON
//! without a `Content-Type` header.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{de::DeserializeOwned, Serialize};
use storefront_catalog::CatalogFilter;
use storefront_core::{
    FilterProductsRequest, FilterProductsResponse, LoadMoreProductsRequest,
    LoadMoreProductsResponse,
};

use crate::middleware::RequestId;

use super::AppState;

#[derive(Debug, Serialize)]
struct GatewayFailure {
    error: String,
}

fn failure(status: StatusCode, error: String) -> Response {
    (status, Json(GatewayFailure { error })).into_response()
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, Response> {
    serde_json::from_str(body).map_err(|e| {
        failure(
            StatusCode::BAD_REQUEST,
            format!("invalid request body: {e}"),
        )
    })
}

pub(super) async fn filter_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: String,
) -> Response {
    let request: FilterProductsRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let filter = CatalogFilter::new(
        request.search_query.as_deref(),
        request.category_id.as_deref(),
        request.sort_by.sort_by(),
    );

    match state.catalog.filter_products(&filter).await {
        Ok(page) => Json(FilterProductsResponse {
            new_products: page.items,
            total_products: page.total_count,
            updated_end_cursor: page.end_cursor,
            error: None,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "FilterProducts failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, e.user_message())
        }
    }
}

pub(super) async fn load_more_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: String,
) -> Response {
    let request: LoadMoreProductsRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    if request.end_cursor.is_empty() {
        return failure(StatusCode::BAD_REQUEST, "endCursor must not be empty".to_owned());
    }
    let filter = CatalogFilter::new(
        request.search_query.as_deref(),
        request.category_id.as_deref(),
        request.sort_by.sort_by(),
    );

    match state
        .catalog
        .load_more_products(&request.end_cursor, &filter)
        .await
    {
        Ok(page) => Json(LoadMoreProductsResponse {
            more_products: page.items,
            updated_end_cursor: page.end_cursor,
            error: None,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "LoadMoreProducts failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, e.user_message())
        }
    }
}
