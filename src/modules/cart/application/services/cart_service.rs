use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cart::application::domain::entities::Cart;
use crate::cart::application::ports::incoming::use_cases::{
    AddToCartCommand, AddToCartUseCase, CartError, GetCartUseCase, RemoveCartItemUseCase,
    UpdateCartItemCommand, UpdateCartItemUseCase,
};
use crate::cart::application::ports::outgoing::{CartRepository, CartRepositoryError};

pub struct CartService<R>
where
    R: CartRepository,
{
    repository: R,
}

impl<R> CartService<R>
where
    R: CartRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_err(e: CartRepositoryError) -> CartError {
    match e {
        CartRepositoryError::ProductNotFound => CartError::ProductNotFound,
        CartRepositoryError::LineNotFound => CartError::CartItemNotFound,
        CartRepositoryError::DatabaseError(msg) => CartError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> GetCartUseCase for CartService<R>
where
    R: CartRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Cart, CartError> {
        self.repository.get_or_create(owner).await.map_err(map_err)
    }
}

#[async_trait]
impl<R> AddToCartUseCase for CartService<R>
where
    R: CartRepository,
{
    async fn execute(&self, owner: UserId, command: AddToCartCommand) -> Result<(), CartError> {
        let request = command.into_request();
        self.repository
            .add_line(owner, request)
            .await
            .map_err(map_err)?;

        tracing::debug!(user_id = %owner, product_id = %request.product_id, "Cart line saved");
        Ok(())
    }
}

#[async_trait]
impl<R> RemoveCartItemUseCase for CartService<R>
where
    R: CartRepository,
{
    async fn execute(&self, owner: UserId, line_id: Uuid) -> Result<(), CartError> {
        self.repository
            .remove_line(owner, line_id)
            .await
            .map_err(map_err)
    }
}

#[async_trait]
impl<R> UpdateCartItemUseCase for CartService<R>
where
    R: CartRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        line_id: Uuid,
        command: UpdateCartItemCommand,
    ) -> Result<(), CartError> {
        self.repository
            .set_line_quantity(owner, line_id, command.quantity())
            .await
            .map_err(map_err)
    }
}
