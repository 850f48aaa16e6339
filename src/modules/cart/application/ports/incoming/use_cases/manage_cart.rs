use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cart::application::domain::entities::{AddToCart, Cart, MIN_LINE_QUANTITY};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartCommandError {
    #[error("Quantity must be a whole number")]
    NotAnInteger,

    #[error("Quantity must be at least 1")]
    BelowMinimum,
}

fn to_i32(value: i64) -> Result<i32, CartCommandError> {
    i32::try_from(value).map_err(|_| CartCommandError::NotAnInteger)
}

#[derive(Debug, Clone, Copy)]
pub struct AddToCartCommand(AddToCart);

impl AddToCartCommand {
    /// `quantity` defaults to 1. Out-of-range values are clamped later by
    /// [`AddToCart::resolve`].
    pub fn new(
        product_id: Uuid,
        quantity: Option<i64>,
        set_quantity: Option<i64>,
    ) -> Result<Self, CartCommandError> {
        Ok(Self(AddToCart {
            product_id,
            quantity: to_i32(quantity.unwrap_or(1))?,
            set_quantity: set_quantity.map(to_i32).transpose()?,
        }))
    }

    pub fn into_request(self) -> AddToCart {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateCartItemCommand {
    quantity: i32,
}

impl UpdateCartItemCommand {
    pub fn new(quantity: i64) -> Result<Self, CartCommandError> {
        let quantity = to_i32(quantity)?;
        if quantity < MIN_LINE_QUANTITY {
            return Err(CartCommandError::BelowMinimum);
        }
        Ok(Self { quantity })
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CartError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Cart item not found")]
    CartItemNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Cart, CartError>;
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, command: AddToCartCommand) -> Result<(), CartError>;
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, line_id: Uuid) -> Result<(), CartError>;
}

#[async_trait]
pub trait UpdateCartItemUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        line_id: Uuid,
        command: UpdateCartItemCommand,
    ) -> Result<(), CartError>;
}
