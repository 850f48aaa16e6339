use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentOrder {
    pub id: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySpend {
    /// `YYYY-MM`
    pub month: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub total_orders: usize,
    pub total_spent: Decimal,
    pub recent_orders: Vec<RecentOrder>,
    pub spending_trends: Vec<MonthlySpend>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait DashboardUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Dashboard, DashboardError>;
}
