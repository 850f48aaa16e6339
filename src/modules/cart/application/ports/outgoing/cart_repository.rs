use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cart::application::domain::entities::{AddToCart, Cart};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CartRepositoryError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Cart item not found")]
    LineNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Each user owns at most one cart, created on first use.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_or_create(&self, owner: UserId) -> Result<Cart, CartRepositoryError>;

    /// Adds or adjusts the line for `request.product_id` using
    /// [`AddToCart::resolve`]. Inactive products are reported as missing.
    async fn add_line(&self, owner: UserId, request: AddToCart) -> Result<(), CartRepositoryError>;

    /// Lines of other users' carts behave as missing.
    async fn remove_line(&self, owner: UserId, line_id: Uuid) -> Result<(), CartRepositoryError>;

    async fn set_line_quantity(
        &self,
        owner: UserId,
        line_id: Uuid,
        quantity: i32,
    ) -> Result<(), CartRepositoryError>;
}
