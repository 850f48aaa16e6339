use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::catalog::application::ports::incoming::use_cases::{
    ManageProductError, ProductCommand, ProductFields,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, post, put, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::ProductResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductRequest {
    pub category_id: Option<Uuid>,
    #[schema(example = "Gala Apple")]
    pub name: Option<String>,
    /// Accepts `"2.49"` or `2.49`.
    #[serde(default, deserialize_with = "decimal_input")]
    #[schema(value_type = Option<String>, example = "2.49")]
    pub price: Option<Decimal>,
    #[schema(example = 4.5)]
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[schema(example = "1 kg")]
    pub weight: Option<String>,
    pub origin: Option<String>,
    pub organic: Option<bool>,
    pub storage: Option<String>,
    #[schema(value_type = Option<Object>, example = json!({"calories": "52 kcal"}))]
    pub nutrition: Option<Value>,
}

fn decimal_input<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err(D::Error::custom("price must be a number")),
    };

    raw.trim()
        .parse::<Decimal>()
        .map(Some)
        .map_err(|_| D::Error::custom("price must be a number"))
}

impl From<ProductRequest> for ProductFields {
    fn from(req: ProductRequest) -> Self {
        Self {
            category_id: req.category_id,
            name: req.name,
            price: req.price,
            rating: req.rating,
            description: req.description,
            image: req.image,
            weight: req.weight,
            origin: req.origin,
            organic: req.organic,
            storage: req.storage,
            nutrition: req.nutrition,
        }
    }
}

fn manage_error_response(e: ManageProductError) -> HttpResponse {
    match e {
        ManageProductError::CategoryNotFound => {
            ApiResponse::bad_request("CATEGORY_NOT_FOUND", "Category does not exist")
        }
        ManageProductError::ProductNotFound => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        ManageProductError::RepositoryError(ref msg) => {
            error!(error = %msg, "Product repository failure");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = "admin",
    request_body = ProductRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Product created", body = inline(SuccessResponse<ProductResponse>)),
        (status = 400, description = "Validation failed or unknown category", body = ErrorResponse),
        (status = 403, description = "Staff only", body = ErrorResponse),
    )
)]
#[post("/api/admin/products")]
pub async fn create_product_handler(
    admin: AdminUser,
    req: web::Json<ProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ProductCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.catalog.create_product.execute(command).await {
        Ok(product) => {
            info!(admin_id = %admin.user_id, product_id = %product.id, "Product created by staff");
            ApiResponse::created(ProductResponse::from(product))
        }
        Err(e) => manage_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Product id")),
    request_body = ProductRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product updated", body = inline(SuccessResponse<ProductResponse>)),
        (status = 400, description = "Validation failed or unknown category", body = ErrorResponse),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 404, description = "Missing or retired", body = ErrorResponse),
    )
)]
#[put("/api/admin/products/{id}")]
pub async fn update_product_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ProductCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .catalog
        .update_product
        .execute(path.into_inner(), command)
        .await
    {
        Ok(product) => ApiResponse::success(ProductResponse::from(product)),
        Err(e) => manage_error_response(e),
    }
}

/// Retire a product; it stays referenced by past orders
#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Product id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Product deactivated"),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 404, description = "Missing or already retired", body = ErrorResponse),
    )
)]
#[delete("/api/admin/products/{id}")]
pub async fn delete_product_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match data.catalog.delete_product.execute(id).await {
        Ok(()) => {
            info!(admin_id = %admin.user_id, product_id = %id, "Product retired by staff");
            ApiResponse::no_content()
        }
        Err(e) => manage_error_response(e),
    }
}
