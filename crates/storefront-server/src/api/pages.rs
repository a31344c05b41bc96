//! Props of the statically generated pages, served on demand.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use storefront_catalog::CatalogError;
use storefront_core::{CatalogPageProps, ProductDetail, ProductPaths};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

fn map_catalog_error(request_id: String, error: &CatalogError) -> ApiError {
    if let CatalogError::ProductNotFound { id } = error {
        return ApiError::new(request_id, "not_found", format!("product {id} not found"));
    }
    tracing::error!(error = %error, "catalog backend request failed");
    ApiError::new(request_id, "upstream_error", error.user_message())
}

pub(super) async fn catalog_props(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<CatalogPageProps>>, ApiError> {
    let data = state
        .catalog
        .fetch_catalog_page_props()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn product_detail(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductDetail>>, ApiError> {
    let data = state
        .catalog
        .fetch_product(&id)
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn product_paths(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<ProductPaths>>, ApiError> {
    let ids = state
        .catalog
        .enumerate_product_ids()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: ProductPaths::from_ids(&ids),
        meta: ResponseMeta::new(req_id.0),
    }))
}
