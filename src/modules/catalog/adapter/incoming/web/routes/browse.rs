use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::catalog::application::ports::incoming::use_cases::BrowseCatalogError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use super::dto::{
    products, CategoryDetailResponse, CategoryResponse, ProductDetailResponse, ProductResponse,
    RelatedProductResponse, ReviewResponse,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive name fragment
    pub q: Option<String>,
}

fn browse_error_response(e: BrowseCatalogError) -> HttpResponse {
    match e {
        BrowseCatalogError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        BrowseCatalogError::ProductNotFound => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        BrowseCatalogError::QueryError(ref msg) => {
            error!(error = %msg, "Catalog query failure");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "catalog",
    responses(
        (status = 200, description = "All categories", body = inline(SuccessResponse<Vec<CategoryResponse>>)),
    )
)]
#[get("/api/categories")]
pub async fn list_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.list_categories.execute().await {
        Ok(categories) => ApiResponse::success(
            categories
                .into_iter()
                .map(CategoryResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => browse_error_response(e),
    }
}

/// Category with its active products
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    tag = "catalog",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category", body = inline(SuccessResponse<CategoryDetailResponse>)),
        (status = 404, description = "Unknown slug", body = ErrorResponse),
    )
)]
#[get("/api/categories/{slug}")]
pub async fn get_category_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.get_category.execute(&path.into_inner()).await {
        Ok(detail) => ApiResponse::success(CategoryDetailResponse {
            category: detail.category.into(),
            products: products(detail.products),
        }),
        Err(e) => browse_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "catalog",
    responses(
        (status = 200, description = "Active products", body = inline(SuccessResponse<Vec<ProductResponse>>)),
    )
)]
#[get("/api/products")]
pub async fn list_products_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.list_products.execute().await {
        Ok(items) => ApiResponse::success(products::<ProductResponse>(items)),
        Err(e) => browse_error_response(e),
    }
}

/// Search products by name (at most 10 results)
#[utoipa::path(
    get,
    path = "/api/products/search",
    tag = "catalog",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matches; empty for a blank query", body = inline(SuccessResponse<Vec<ProductResponse>>)),
    )
)]
#[get("/api/products/search")]
pub async fn search_products_handler(
    query: web::Query<SearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let term = query.into_inner().q.unwrap_or_default();

    match data.catalog.search_products.execute(&term).await {
        Ok(items) => ApiResponse::success(products::<ProductResponse>(items)),
        Err(e) => browse_error_response(e),
    }
}

/// Product with its reviews
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = inline(SuccessResponse<ProductDetailResponse>)),
        (status = 404, description = "Missing or retired", body = ErrorResponse),
    )
)]
#[get("/api/products/{id}")]
pub async fn get_product_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.get_product.execute(path.into_inner()).await {
        Ok(detail) => ApiResponse::success(ProductDetailResponse {
            product: detail.product.into(),
            reviews: detail
                .reviews
                .into_iter()
                .map(ReviewResponse::from)
                .collect(),
        }),
        Err(e) => browse_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/related",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Up to five products of the same category", body = inline(SuccessResponse<Vec<RelatedProductResponse>>)),
        (status = 404, description = "Missing or retired", body = ErrorResponse),
    )
)]
#[get("/api/products/{id}/related")]
pub async fn related_products_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.related_products.execute(path.into_inner()).await {
        Ok(items) => ApiResponse::success(products::<RelatedProductResponse>(items)),
        Err(e) => browse_error_response(e),
    }
}
