use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cart::adapter::outgoing::sea_orm_entity::cart_items::{
    Column as CartItemColumn, Entity as CartItemEntity,
};
use crate::cart::adapter::outgoing::sea_orm_entity::carts::{
    Column as CartColumn, Entity as CartEntity,
};
use crate::catalog::adapter::outgoing::sea_orm_entity::products::{self, Entity as ProductEntity};
use crate::orders::application::domain::entities::{
    Order, OrderItem, OrderProduct, OrderStatus, PlacedOrder,
};
use crate::orders::application::domain::pricing::quote;
use crate::orders::application::ports::outgoing::{OrderRepository, OrderRepositoryError};

use super::sea_orm_entity::order_items::{
    self, ActiveModel as OrderItemActiveModel, Column as OrderItemColumn,
    Entity as OrderItemEntity,
};
use super::sea_orm_entity::orders::{
    self, ActiveModel as OrderActiveModel, Column as OrderColumn, Entity as OrderEntity,
};

#[derive(Clone)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> OrderRepositoryError {
        OrderRepositoryError::DatabaseError(e.to_string())
    }

    async fn checkout_in<C: ConnectionTrait>(
        conn: &C,
        owner: Uuid,
        order_number: String,
        promo_code: Option<&str>,
    ) -> Result<PlacedOrder, OrderRepositoryError> {
        // Locking the cart row serializes concurrent checkouts of one user.
        let cart = CartEntity::find()
            .filter(CartColumn::UserId.eq(owner))
            .lock_exclusive()
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(OrderRepositoryError::CartEmpty)?;

        let lines: Vec<_> = CartItemEntity::find()
            .filter(CartItemColumn::CartId.eq(cart.id))
            .order_by_asc(CartItemColumn::AddedAt)
            .find_also_related(ProductEntity)
            .all(conn)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .filter_map(|(item, product)| product.map(|p| (item, p)))
            .collect();
        if lines.is_empty() {
            return Err(OrderRepositoryError::CartEmpty);
        }

        let q = quote(
            lines
                .iter()
                .map(|(item, product)| (product.price, item.quantity)),
            promo_code,
        );
        let now = Utc::now().fixed_offset();
        let order_pk = Uuid::new_v4();

        OrderEntity::insert(OrderActiveModel {
            id: Set(order_pk),
            order_id: Set(order_number.clone()),
            user_id: Set(owner),
            total: Set(q.total),
            discount: Set(q.discount),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(conn)
        .await
        .map_err(Self::map_db_err)?;

        OrderItemEntity::insert_many(lines.iter().map(|(item, product)| OrderItemActiveModel {
            id: Set(Uuid::new_v4()),
            order_id: Set(order_pk),
            product_id: Set(product.id),
            quantity: Set(item.quantity),
            price: Set(product.price),
        }))
        .exec_without_returning(conn)
        .await
        .map_err(Self::map_db_err)?;

        CartItemEntity::delete_many()
            .filter(CartItemColumn::CartId.eq(cart.id))
            .exec(conn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(PlacedOrder {
            order_id: order_number,
            total: q.total,
            discount: q.discount,
        })
    }

    fn to_item(item: order_items::Model, product: products::Model) -> OrderItem {
        OrderItem {
            product: OrderProduct {
                id: product.id,
                name: product.name,
                price: product.price,
                image: product.image,
            },
            quantity: item.quantity,
            price: item.price,
        }
    }

    fn to_order(
        model: orders::Model,
        items: Vec<OrderItem>,
    ) -> Result<Order, OrderRepositoryError> {
        let status = model.status.parse::<OrderStatus>().map_err(|_| {
            OrderRepositoryError::DatabaseError(format!(
                "order {} has unknown status '{}'",
                model.order_id, model.status
            ))
        })?;

        Ok(Order {
            id: model.id,
            order_id: model.order_id,
            user_id: UserId::from(model.user_id),
            status,
            total: model.total,
            discount: model.discount,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            items,
        })
    }

    /// Loads the items of every order in one query.
    async fn with_items(
        &self,
        models: Vec<orders::Model>,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|o| o.id).collect();
        let rows = OrderItemEntity::find()
            .filter(OrderItemColumn::OrderId.is_in(ids))
            .find_also_related(ProductEntity)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let mut by_order: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
        for (item, product) in rows {
            if let Some(product) = product {
                by_order
                    .entry(item.order_id)
                    .or_default()
                    .push(Self::to_item(item, product));
            }
        }

        models
            .into_iter()
            .map(|model| {
                let items = by_order.remove(&model.id).unwrap_or_default();
                Self::to_order(model, items)
            })
            .collect()
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn checkout(
        &self,
        owner: UserId,
        order_number: String,
        promo_code: Option<String>,
    ) -> Result<PlacedOrder, OrderRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::checkout_in(&txn, owner.value(), order_number, promo_code.as_deref()).await {
            Ok(placed) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(placed)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn list_for_user(&self, owner: UserId) -> Result<Vec<Order>, OrderRepositoryError> {
        let models = OrderEntity::find()
            .filter(OrderColumn::UserId.eq(owner.value()))
            .order_by_desc(OrderColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        self.with_items(models).await
    }

    async fn find_for_user(
        &self,
        owner: UserId,
        order_number: &str,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        let model = OrderEntity::find()
            .filter(OrderColumn::OrderId.eq(order_number))
            .filter(OrderColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        match model {
            Some(model) => Ok(self.with_items(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn update_status(
        &self,
        order_number: &str,
        owner: Option<UserId>,
        status: OrderStatus,
    ) -> Result<(), OrderRepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut update = OrderEntity::update_many()
            .col_expr(OrderColumn::Status, Expr::value(status.as_str()))
            .col_expr(OrderColumn::UpdatedAt, Expr::value(now))
            .filter(OrderColumn::OrderId.eq(order_number));
        if let Some(owner) = owner {
            update = update.filter(OrderColumn::UserId.eq(owner.value()));
        }

        let result = update.exec(&*self.db).await.map_err(Self::map_db_err)?;
        if result.rows_affected == 0 {
            return Err(OrderRepositoryError::NotFound);
        }
        Ok(())
    }
}
