use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict, Query, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cart::application::domain::entities::{AddToCart, Cart, CartLine, CartProduct};
use crate::cart::application::ports::outgoing::{CartRepository, CartRepositoryError};
use crate::catalog::adapter::outgoing::sea_orm_entity::products::{
    self, Column as ProductColumn, Entity as ProductEntity,
};

use super::sea_orm_entity::cart_items::{
    self, ActiveModel as CartItemActiveModel, Column as CartItemColumn, Entity as CartItemEntity,
};
use super::sea_orm_entity::carts::{
    self, ActiveModel as CartActiveModel, Column as CartColumn, Entity as CartEntity,
};

#[derive(Clone)]
pub struct CartRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CartRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CartRepositoryError {
        CartRepositoryError::DatabaseError(e.to_string())
    }

    /// Returns the owner's cart, inserting it if this is the first visit.
    async fn ensure_cart<C: ConnectionTrait>(conn: &C, owner: Uuid) -> Result<carts::Model, DbErr> {
        if let Some(cart) = CartEntity::find()
            .filter(CartColumn::UserId.eq(owner))
            .one(conn)
            .await?
        {
            return Ok(cart);
        }

        CartEntity::insert(CartActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner),
            created_at: Set(Utc::now().fixed_offset()),
        })
        .on_conflict(OnConflict::column(CartColumn::UserId).do_nothing().to_owned())
        .exec_without_returning(conn)
        .await?;

        CartEntity::find()
            .filter(CartColumn::UserId.eq(owner))
            .one(conn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("cart for user {}", owner)))
    }

    /// Restricts cart item statements to lines in `owner`'s cart.
    fn owned_by(owner: Uuid) -> SimpleExpr {
        CartItemColumn::CartId.in_subquery(
            Query::select()
                .column(CartColumn::Id)
                .from(CartEntity)
                .and_where(CartColumn::UserId.eq(owner))
                .to_owned(),
        )
    }

    fn to_line((item, product): (cart_items::Model, Option<products::Model>)) -> Option<CartLine> {
        let product = product?;
        Some(CartLine {
            id: item.id,
            product: CartProduct {
                id: product.id,
                name: product.name,
                price: product.price,
                image: product.image,
            },
            quantity: item.quantity,
        })
    }

    async fn find_line_locked<C: ConnectionTrait>(
        conn: &C,
        cart_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<cart_items::Model>, CartRepositoryError> {
        CartItemEntity::find()
            .filter(CartItemColumn::CartId.eq(cart_id))
            .filter(CartItemColumn::ProductId.eq(product_id))
            .lock_exclusive()
            .one(conn)
            .await
            .map_err(Self::map_db_err)
    }

    async fn merge_into<C: ConnectionTrait>(
        conn: &C,
        line: cart_items::Model,
        request: &AddToCart,
    ) -> Result<(), CartRepositoryError> {
        let quantity = request.resolve(Some(line.quantity));
        let mut active: CartItemActiveModel = line.into();
        active.quantity = Set(quantity);
        active.update(conn).await.map_err(Self::map_db_err)?;
        Ok(())
    }

    async fn add_line_in<C: ConnectionTrait>(
        conn: &C,
        owner: Uuid,
        request: AddToCart,
    ) -> Result<(), CartRepositoryError> {
        let available = ProductEntity::find_by_id(request.product_id)
            .filter(ProductColumn::IsActive.eq(true))
            .one(conn)
            .await
            .map_err(Self::map_db_err)?;
        if available.is_none() {
            return Err(CartRepositoryError::ProductNotFound);
        }

        let cart = Self::ensure_cart(conn, owner)
            .await
            .map_err(Self::map_db_err)?;

        if let Some(line) = Self::find_line_locked(conn, cart.id, request.product_id).await? {
            return Self::merge_into(conn, line, &request).await;
        }

        // A concurrent first add of the same product wins the unique index;
        // this insert then does nothing and the quantities are merged instead.
        let inserted = CartItemEntity::insert(CartItemActiveModel {
            id: Set(Uuid::new_v4()),
            cart_id: Set(cart.id),
            product_id: Set(request.product_id),
            quantity: Set(request.resolve(None)),
            added_at: Set(Utc::now().fixed_offset()),
        })
        .on_conflict(
            OnConflict::columns([CartItemColumn::CartId, CartItemColumn::ProductId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
        .map_err(Self::map_db_err)?;

        if inserted == 0 {
            let line = Self::find_line_locked(conn, cart.id, request.product_id)
                .await?
                .ok_or_else(|| {
                    CartRepositoryError::DatabaseError(format!(
                        "cart line for product {} vanished after conflict",
                        request.product_id
                    ))
                })?;
            return Self::merge_into(conn, line, &request).await;
        }

        Ok(())
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_or_create(&self, owner: UserId) -> Result<Cart, CartRepositoryError> {
        let cart = Self::ensure_cart(&*self.db, owner.value())
            .await
            .map_err(Self::map_db_err)?;

        let rows = CartItemEntity::find()
            .filter(CartItemColumn::CartId.eq(cart.id))
            .order_by_asc(CartItemColumn::AddedAt)
            .find_also_related(ProductEntity)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Cart {
            id: cart.id,
            items: rows.into_iter().filter_map(Self::to_line).collect(),
        })
    }

    async fn add_line(&self, owner: UserId, request: AddToCart) -> Result<(), CartRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::add_line_in(&txn, owner.value(), request).await {
            Ok(()) => txn.commit().await.map_err(Self::map_db_err),
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn remove_line(&self, owner: UserId, line_id: Uuid) -> Result<(), CartRepositoryError> {
        let result = CartItemEntity::delete_many()
            .filter(CartItemColumn::Id.eq(line_id))
            .filter(Self::owned_by(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CartRepositoryError::LineNotFound);
        }
        Ok(())
    }

    async fn set_line_quantity(
        &self,
        owner: UserId,
        line_id: Uuid,
        quantity: i32,
    ) -> Result<(), CartRepositoryError> {
        let result = CartItemEntity::update_many()
            .col_expr(CartItemColumn::Quantity, Expr::value(quantity))
            .filter(CartItemColumn::Id.eq(line_id))
            .filter(Self::owned_by(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CartRepositoryError::LineNotFound);
        }
        Ok(())
    }
}
