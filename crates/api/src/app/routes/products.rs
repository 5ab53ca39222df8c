use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use skuvault_products::{NewProduct, Product};

use crate::app::dto::{ListProductsQuery, ProductEnvelope, ProductsEnvelope, ResultEnvelope};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/product", post(create_product))
        .route("/product/:sku", get(get_product).delete(delete_product))
}

/// `GET /products?limit=&offset=`
///
/// An empty page is reported as 404 rather than an empty list.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<ProductsEnvelope>, ApiError> {
    let page = query
        .map(|Query(pairs)| ListProductsQuery::from_pairs(pairs))
        .unwrap_or_default()
        .page();

    let products = services.store().fetch_page(page).await?;
    if products.is_empty() {
        return Err(ApiError::NotFound);
    }

    tracing::info!(
        count = products.len(),
        limit = page.limit(),
        offset = page.offset(),
        "listed products"
    );
    Ok(Json(ProductsEnvelope { products }))
}

/// `GET /product/:sku`
pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sku): Path<String>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let product = services.store().fetch_by_sku(&sku).await?;
    tracing::info!(id = %product.id, sku = %product.sku, "product fetched");
    Ok(Json(ProductEnvelope { product }))
}

/// `POST /product`
///
/// The body is decoded regardless of `Content-Type`; anything that is not a
/// `{sku, product_name}` object with a non-blank `sku` is a bad request.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let new: NewProduct = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "create body failed to decode");
        ApiError::InvalidPayload
    })?;
    new.validate().map_err(|e| {
        tracing::debug!(error = %e, "create body failed validation");
        ApiError::InvalidPayload
    })?;

    let product = services
        .store()
        .insert(new)
        .await
        .map_err(ApiError::storage)?;

    tracing::info!(id = %product.id, sku = %product.sku, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// `DELETE /product/:sku`
///
/// Succeeds whether or not a matching row existed.
pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sku): Path<String>,
) -> Result<Json<ResultEnvelope>, ApiError> {
    let removed = services
        .store()
        .delete_by_sku(&sku)
        .await
        .map_err(ApiError::storage)?;

    tracing::info!(sku = %sku, removed, "product delete");
    Ok(Json(ResultEnvelope::success()))
}
