use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::cart::application::domain::entities::{Cart, CartLine};
use crate::cart::application::ports::incoming::use_cases::{
    AddToCartCommand, CartError, UpdateCartItemCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct CartProductResponse {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "2.49")]
    pub price: Decimal,
    pub image: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemResponse {
    pub id: Uuid,
    pub product: CartProductResponse,
    #[schema(example = 2)]
    pub quantity: i32,
    #[schema(value_type = String, example = "4.98")]
    pub total_price: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub id: Uuid,
    pub items: Vec<CartItemResponse>,
    #[schema(value_type = String, example = "4.98")]
    pub total: Decimal,
}

impl From<CartLine> for CartItemResponse {
    fn from(line: CartLine) -> Self {
        Self {
            total_price: line.total_price(),
            id: line.id,
            quantity: line.quantity,
            product: CartProductResponse {
                id: line.product.id,
                name: line.product.name,
                price: line.product.price,
                image: line.product.image,
            },
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total: cart.total(),
            id: cart.id,
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: Uuid,
    /// Added to an existing line; defaults to 1
    #[schema(value_type = Option<i64>, example = 1)]
    pub quantity: Option<Value>,
    /// Replaces the quantity of an existing line
    #[schema(value_type = Option<i64>)]
    pub set_quantity: Option<Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCartItemRequest {
    #[schema(value_type = i64, example = 3)]
    pub quantity: Option<Value>,
}

/// Whole numbers, given either as JSON integers or numeric strings.
fn whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn optional_whole_number(value: Option<&Value>) -> Result<Option<i64>, HttpResponse> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => whole_number(v).map(Some).ok_or_else(invalid_quantity),
    }
}

fn invalid_quantity() -> HttpResponse {
    ApiResponse::bad_request("INVALID_QUANTITY", "Valid quantity is required")
}

fn cart_error_response(e: CartError) -> HttpResponse {
    match e {
        CartError::ProductNotFound => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        CartError::CartItemNotFound => {
            ApiResponse::not_found("CART_ITEM_NOT_FOUND", "Cart item not found")
        }
        CartError::RepositoryError(ref msg) => {
            error!(error = %msg, "Cart repository failure");
            ApiResponse::internal_error()
        }
    }
}

/// The caller's cart, created on first access
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = "cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cart", body = inline(SuccessResponse<CartResponse>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    )
)]
#[get("/api/cart")]
pub async fn get_cart_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cart.get.execute(user.user_id).await {
        Ok(cart) => ApiResponse::success(CartResponse::from(cart)),
        Err(e) => cart_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/cart/add",
    tag = "cart",
    request_body = AddToCartRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Line added or adjusted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Quantity is not a whole number", body = ErrorResponse),
        (status = 404, description = "Missing or retired product", body = ErrorResponse),
    )
)]
#[post("/api/cart/add")]
pub async fn add_to_cart_handler(
    user: AuthenticatedUser,
    req: web::Json<AddToCartRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let quantity = match optional_whole_number(req.quantity.as_ref()) {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    let set_quantity = match optional_whole_number(req.set_quantity.as_ref()) {
        Ok(q) => q,
        Err(resp) => return resp,
    };
    let command = match AddToCartCommand::new(req.product_id, quantity, set_quantity) {
        Ok(cmd) => cmd,
        Err(_) => return invalid_quantity(),
    };

    match data.cart.add.execute(user.user_id, command).await {
        Ok(()) => ApiResponse::created(MessageResponse::new("Product added to cart")),
        Err(e) => cart_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/cart/remove/{cart_item_id}",
    tag = "cart",
    params(("cart_item_id" = Uuid, Path, description = "Cart line id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Line removed"),
        (status = 404, description = "Not in the caller's cart", body = ErrorResponse),
    )
)]
#[delete("/api/cart/remove/{cart_item_id}")]
pub async fn remove_cart_item_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .cart
        .remove
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => cart_error_response(e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/cart/update/{cart_item_id}",
    tag = "cart",
    params(("cart_item_id" = Uuid, Path, description = "Cart line id")),
    request_body = UpdateCartItemRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Quantity set", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Quantity missing or below 1", body = ErrorResponse),
        (status = 404, description = "Not in the caller's cart", body = ErrorResponse),
    )
)]
#[patch("/api/cart/update/{cart_item_id}")]
pub async fn update_cart_item_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCartItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req
        .quantity
        .as_ref()
        .and_then(whole_number)
        .map(UpdateCartItemCommand::new)
    {
        Some(Ok(cmd)) => cmd,
        _ => return invalid_quantity(),
    };

    match data
        .cart
        .update
        .execute(user.user_id, path.into_inner(), command)
        .await
    {
        Ok(()) => ApiResponse::success(MessageResponse::new("Cart item updated")),
        Err(e) => cart_error_response(e),
    }
}
