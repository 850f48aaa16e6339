use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub order_id: String,
    pub status: String,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderHistoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only view over a user's orders used by the account dashboard.
#[async_trait]
pub trait OrderHistoryQuery: Send + Sync {
    /// Newest first.
    async fn list_for_user(
        &self,
        owner: UserId,
    ) -> Result<Vec<OrderSummary>, OrderHistoryQueryError>;
}
