use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::orders::application::domain::entities::{
    DeliverySlot, Order, OrderItem, PlacedOrder, DELIVERY_SLOTS,
};
use crate::orders::application::domain::timeline::{timeline, StepStatus, TimelineStep};
use crate::orders::application::ports::incoming::use_cases::{
    CheckoutCommand, OrderActor, OrderError, UpdateOrderStatusCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, patch, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    #[schema(example = "DISCOUNT20")]
    pub promo_code: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub message: String,
    #[schema(example = "ORD-20250314-7K2QX9BD")]
    pub order_id: String,
    #[schema(value_type = String, example = "15.92")]
    pub total: Decimal,
    #[schema(value_type = String, example = "3.98")]
    pub discount: Decimal,
}

impl From<PlacedOrder> for CheckoutResponse {
    fn from(placed: PlacedOrder) -> Self {
        Self {
            message: "Order created successfully".to_string(),
            order_id: placed.order_id,
            total: placed.total,
            discount: placed.discount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderProductResponse {
    pub id: Uuid,
    pub name: String,
    /// Current catalog price
    #[schema(value_type = String, example = "2.49")]
    pub price: Decimal,
    pub image: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub product: OrderProductResponse,
    pub quantity: i32,
    /// Unit price paid
    #[schema(value_type = String, example = "1.99")]
    pub price: Decimal,
    #[schema(value_type = String, example = "3.98")]
    pub total_price: Decimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            total_price: item.total_price(),
            quantity: item.quantity,
            price: item.price,
            product: OrderProductResponse {
                id: item.product.id,
                name: item.product.name,
                price: item.product.price,
                image: item.product.image,
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub order_id: String,
    #[schema(example = "pending")]
    pub status: String,
    #[schema(value_type = String, example = "15.92")]
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            status: order.status.to_string(),
            total: order.total,
            created_at: order.created_at,
            updated_at: order.updated_at,
            items: order
                .items
                .into_iter()
                .map(OrderItemResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TimelineStepResponse {
    pub title: String,
    pub description: String,
    #[schema(value_type = String, example = "completed")]
    pub status: StepStatus,
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<TimelineStep> for TimelineStepResponse {
    fn from(step: TimelineStep) -> Self {
        Self {
            title: step.title.to_string(),
            description: step.description.to_string(),
            status: step.status,
            timestamp: step.timestamp,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub timeline: Vec<TimelineStepResponse>,
}

impl From<Order> for OrderDetailResponse {
    fn from(order: Order) -> Self {
        let timeline = timeline(&order)
            .into_iter()
            .map(TimelineStepResponse::from)
            .collect();
        Self {
            order: OrderResponse::from(order),
            timeline,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[schema(example = "shipped")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliverySlotResponse {
    pub id: u8,
    #[schema(example = "9:00 AM - 11:00 AM")]
    pub time: String,
    pub available: bool,
}

impl From<&DeliverySlot> for DeliverySlotResponse {
    fn from(slot: &DeliverySlot) -> Self {
        Self {
            id: slot.id,
            time: slot.time.to_string(),
            available: slot.available,
        }
    }
}

fn order_error_response(e: OrderError) -> HttpResponse {
    match e {
        OrderError::CartEmpty => ApiResponse::bad_request("CART_EMPTY", "Cart is empty"),
        OrderError::OrderNotFound => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        OrderError::RepositoryError(ref msg) => {
            error!(error = %msg, "Order repository failure");
            ApiResponse::internal_error()
        }
    }
}

/// Turn the caller's cart into an order
#[utoipa::path(
    post,
    path = "/api/orders/checkout",
    tag = "orders",
    request_body = CheckoutRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Order placed", body = inline(SuccessResponse<CheckoutResponse>)),
        (status = 400, description = "Cart is empty", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    )
)]
#[post("/api/orders/checkout")]
pub async fn checkout_handler(
    user: AuthenticatedUser,
    req: Option<web::Json<CheckoutRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.map(web::Json::into_inner).unwrap_or_default();
    let command = CheckoutCommand::new(req.promo_code);

    match data.orders.checkout.execute(user.user_id, command).await {
        Ok(placed) => ApiResponse::created(CheckoutResponse::from(placed)),
        Err(e) => order_error_response(e),
    }
}

/// The caller's orders, newest first
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders", body = inline(SuccessResponse<Vec<OrderResponse>>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    )
)]
#[get("/api/orders")]
pub async fn list_orders_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.orders.list.execute(user.user_id).await {
        Ok(orders) => ApiResponse::success(
            orders
                .into_iter()
                .map(OrderResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => order_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = "orders",
    params(("order_id" = String, Path, description = "Order number, e.g. ORD-20250314-7K2QX9BD")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order with delivery timeline", body = inline(SuccessResponse<OrderDetailResponse>)),
        (status = 404, description = "No such order for the caller", body = ErrorResponse),
    )
)]
#[get("/api/orders/{order_id}")]
pub async fn get_order_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.orders.get.execute(user.user_id, &path).await {
        Ok(order) => ApiResponse::success(OrderDetailResponse::from(order)),
        Err(e) => order_error_response(e),
    }
}

/// Owners and staff may change an order's status
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}/update-status",
    tag = "orders",
    params(("order_id" = String, Path, description = "Order number")),
    request_body = UpdateOrderStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Status changed", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 404, description = "No such order, or not the caller's", body = ErrorResponse),
    )
)]
#[patch("/api/orders/{order_id}/update-status")]
pub async fn update_order_status_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<UpdateOrderStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req
        .status
        .as_deref()
        .map(UpdateOrderStatusCommand::new)
    {
        Some(Ok(cmd)) => cmd,
        Some(Err(e)) => return ApiResponse::bad_request("INVALID_STATUS", &e.to_string()),
        None => return ApiResponse::bad_request("INVALID_STATUS", "Status is required"),
    };
    let actor = OrderActor {
        user_id: user.user_id,
        is_staff: user.is_staff,
    };

    match data
        .orders
        .update_status
        .execute(actor, &path, command)
        .await
    {
        Ok(()) => ApiResponse::success(MessageResponse::new("Order status updated")),
        Err(e) => order_error_response(e),
    }
}

/// Fixed delivery windows
#[utoipa::path(
    get,
    path = "/api/delivery-times",
    tag = "orders",
    responses(
        (status = 200, description = "Delivery slots", body = inline(SuccessResponse<Vec<DeliverySlotResponse>>)),
    )
)]
#[get("/api/delivery-times")]
pub async fn delivery_times_handler() -> impl Responder {
    ApiResponse::success(
        DELIVERY_SLOTS
            .iter()
            .map(DeliverySlotResponse::from)
            .collect::<Vec<_>>(),
    )
}
