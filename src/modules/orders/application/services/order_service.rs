use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::orders::application::domain::entities::{Order, PlacedOrder};
use crate::orders::application::domain::pricing::order_number;
use crate::orders::application::ports::incoming::use_cases::{
    CheckoutCommand, CheckoutUseCase, GetOrderUseCase, ListOrdersUseCase, OrderActor, OrderError,
    UpdateOrderStatusCommand, UpdateOrderStatusUseCase,
};
use crate::orders::application::ports::outgoing::{OrderRepository, OrderRepositoryError};

pub struct OrderService<R>
where
    R: OrderRepository,
{
    repository: R,
}

impl<R> OrderService<R>
where
    R: OrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_err(e: OrderRepositoryError) -> OrderError {
    match e {
        OrderRepositoryError::CartEmpty => OrderError::CartEmpty,
        OrderRepositoryError::NotFound => OrderError::OrderNotFound,
        OrderRepositoryError::DatabaseError(msg) => OrderError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> CheckoutUseCase for OrderService<R>
where
    R: OrderRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        command: CheckoutCommand,
    ) -> Result<PlacedOrder, OrderError> {
        let placed = self
            .repository
            .checkout(owner, order_number(Utc::now()), command.into_promo_code())
            .await
            .map_err(map_err)?;

        tracing::info!(
            user_id = %owner,
            order_id = %placed.order_id,
            total = %placed.total,
            discount = %placed.discount,
            "Order placed"
        );
        Ok(placed)
    }
}

#[async_trait]
impl<R> ListOrdersUseCase for OrderService<R>
where
    R: OrderRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<Order>, OrderError> {
        self.repository.list_for_user(owner).await.map_err(map_err)
    }
}

#[async_trait]
impl<R> GetOrderUseCase for OrderService<R>
where
    R: OrderRepository,
{
    async fn execute(&self, owner: UserId, order_number: &str) -> Result<Order, OrderError> {
        self.repository
            .find_for_user(owner, order_number)
            .await
            .map_err(map_err)?
            .ok_or(OrderError::OrderNotFound)
    }
}

#[async_trait]
impl<R> UpdateOrderStatusUseCase for OrderService<R>
where
    R: OrderRepository,
{
    async fn execute(
        &self,
        actor: OrderActor,
        order_number: &str,
        command: UpdateOrderStatusCommand,
    ) -> Result<(), OrderError> {
        let owner = (!actor.is_staff).then_some(actor.user_id);

        self.repository
            .update_status(order_number, owner, command.status())
            .await
            .map_err(map_err)?;

        tracing::info!(
            order_id = %order_number,
            status = %command.status(),
            by = %actor.user_id,
            "Order status changed"
        );
        Ok(())
    }
}
