use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    OrderHistoryQuery, OrderHistoryQueryError, OrderSummary,
};
use crate::orders::adapter::outgoing::sea_orm_entity::orders::{
    Column as OrderColumn, Entity as OrderEntity,
};

#[derive(Clone, Debug)]
pub struct OrderHistoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderHistoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderHistoryQuery for OrderHistoryQueryPostgres {
    async fn list_for_user(
        &self,
        owner: UserId,
    ) -> Result<Vec<OrderSummary>, OrderHistoryQueryError> {
        let orders = OrderEntity::find()
            .filter(OrderColumn::UserId.eq(owner.value()))
            .order_by_desc(OrderColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| OrderHistoryQueryError::DatabaseError(e.to_string()))?;

        Ok(orders
            .into_iter()
            .map(|o| OrderSummary {
                order_id: o.order_id,
                status: o.status,
                total: o.total,
                created_at: o.created_at.into(),
            })
            .collect())
    }
}
