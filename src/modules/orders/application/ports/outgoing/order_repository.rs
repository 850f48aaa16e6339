use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::orders::application::domain::entities::{Order, OrderStatus, PlacedOrder};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderRepositoryError {
    #[error("Cart is empty")]
    CartEmpty,

    #[error("Order not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Turns the owner's cart into an order numbered `order_number` and
    /// empties the cart, all or nothing.
    async fn checkout(
        &self,
        owner: UserId,
        order_number: String,
        promo_code: Option<String>,
    ) -> Result<PlacedOrder, OrderRepositoryError>;

    /// Newest first.
    async fn list_for_user(&self, owner: UserId) -> Result<Vec<Order>, OrderRepositoryError>;

    async fn find_for_user(
        &self,
        owner: UserId,
        order_number: &str,
    ) -> Result<Option<Order>, OrderRepositoryError>;

    /// `owner = None` updates regardless of who placed the order.
    async fn update_status(
        &self,
        order_number: &str,
        owner: Option<UserId>,
        status: OrderStatus,
    ) -> Result<(), OrderRepositoryError>;
}
