use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::orders::application::domain::entities::{
    InvalidOrderStatus, Order, OrderStatus, PlacedOrder,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutCommand {
    promo_code: Option<String>,
}

impl CheckoutCommand {
    /// Blank promo codes count as none.
    pub fn new(promo_code: Option<String>) -> Self {
        let promo_code = promo_code
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        Self { promo_code }
    }

    pub fn promo_code(&self) -> Option<&str> {
        self.promo_code.as_deref()
    }

    pub fn into_promo_code(self) -> Option<String> {
        self.promo_code
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateOrderStatusCommand {
    status: OrderStatus,
}

impl UpdateOrderStatusCommand {
    pub fn new(status: &str) -> Result<Self, InvalidOrderStatus> {
        Ok(Self {
            status: status.trim().parse()?,
        })
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

/// Caller of a status change; staff may update any order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderActor {
    pub user_id: UserId,
    pub is_staff: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderError {
    #[error("Cart is empty")]
    CartEmpty,

    #[error("Order not found")]
    OrderNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: CheckoutCommand,
    ) -> Result<PlacedOrder, OrderError>;
}

#[async_trait]
pub trait ListOrdersUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<Order>, OrderError>;
}

#[async_trait]
pub trait GetOrderUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, order_number: &str) -> Result<Order, OrderError>;
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: OrderActor,
        order_number: &str,
        command: UpdateOrderStatusCommand,
    ) -> Result<(), OrderError>;
}
