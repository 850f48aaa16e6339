use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::domain::entities::Product;
use crate::catalog::application::ports::outgoing::{
    ProductData, ProductRepository, ProductRepositoryError,
};

use super::sea_orm_entity::categories::Entity as CategoryEntity;
use super::sea_orm_entity::products::{
    ActiveModel as ProductActiveModel, Column as ProductColumn, Entity as ProductEntity,
};

#[derive(Clone)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ProductRepositoryError {
        ProductRepositoryError::DatabaseError(e.to_string())
    }

    fn apply(active: &mut ProductActiveModel, data: ProductData) {
        active.category_id = Set(data.category_id);
        active.name = Set(data.name);
        active.price = Set(data.price);
        active.rating = Set(data.rating);
        active.description = Set(data.description);
        active.image = Set(data.image);
        active.weight = Set(data.weight);
        active.origin = Set(data.origin);
        active.organic = Set(data.organic);
        active.storage = Set(data.storage);
        active.nutrition = Set(data.nutrition.to_json());
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn category_exists(&self, id: Uuid) -> Result<bool, ProductRepositoryError> {
        let found = CategoryEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;
        Ok(found.is_some())
    }

    async fn create(&self, data: ProductData) -> Result<Product, ProductRepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut active = ProductActiveModel {
            id: Set(Uuid::new_v4()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        Self::apply(&mut active, data);

        let model = active.insert(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(model.to_product())
    }

    async fn update(&self, id: Uuid, data: ProductData) -> Result<Product, ProductRepositoryError> {
        let existing = ProductEntity::find_by_id(id)
            .filter(ProductColumn::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ProductRepositoryError::NotFound)?;

        let mut active: ProductActiveModel = existing.into();
        Self::apply(&mut active, data);

        let model = active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(model.to_product())
    }

    async fn deactivate(&self, id: Uuid) -> Result<(), ProductRepositoryError> {
        let result = ProductEntity::update_many()
            .col_expr(ProductColumn::IsActive, Expr::value(false))
            .filter(ProductColumn::Id.eq(id))
            .filter(ProductColumn::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProductRepositoryError::NotFound);
        }
        Ok(())
    }
}
