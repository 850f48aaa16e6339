use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Category, Product};
use crate::catalog::application::ports::outgoing::{CatalogQuery, CatalogQueryError};

use super::sea_orm_entity::categories::{Column as CategoryColumn, Entity as CategoryEntity};
use super::sea_orm_entity::products::{self, Column as ProductColumn, Entity as ProductEntity};

#[derive(Clone)]
pub struct CatalogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CatalogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active() -> Select<ProductEntity> {
        ProductEntity::find().filter(ProductColumn::IsActive.eq(true))
    }

    async fn products(
        &self,
        select: Select<ProductEntity>,
    ) -> Result<Vec<Product>, CatalogQueryError> {
        let models: Vec<products::Model> = select.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.iter().map(|m| m.to_product()).collect())
    }
}

/// `%term%` with LIKE wildcards in the term matched literally.
fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn map_db_err(e: DbErr) -> CatalogQueryError {
    CatalogQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CatalogQuery for CatalogQueryPostgres {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogQueryError> {
        let models = CategoryEntity::find()
            .order_by_asc(CategoryColumn::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_category()).collect())
    }

    async fn find_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Category>, CatalogQueryError> {
        let model = CategoryEntity::find()
            .filter(CategoryColumn::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_category()))
    }

    async fn list_products(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<Product>, CatalogQueryError> {
        let mut select = Self::active();
        if let Some(id) = category_id {
            select = select.filter(ProductColumn::CategoryId.eq(id));
        }

        self.products(select.order_by_asc(ProductColumn::Name))
            .await
    }

    async fn search_products(
        &self,
        term: &str,
        limit: u64,
    ) -> Result<Vec<Product>, CatalogQueryError> {
        let select = Self::active()
            .filter(Expr::col(ProductColumn::Name).ilike(contains_pattern(term)))
            .order_by_asc(ProductColumn::Name)
            .limit(limit);

        self.products(select).await
    }

    async fn find_product(&self, id: Uuid) -> Result<Option<Product>, CatalogQueryError> {
        let model = Self::active()
            .filter(ProductColumn::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_product()))
    }

    async fn related_products(
        &self,
        category_id: Uuid,
        exclude: Uuid,
        limit: u64,
    ) -> Result<Vec<Product>, CatalogQueryError> {
        let select = Self::active()
            .filter(ProductColumn::CategoryId.eq(category_id))
            .filter(ProductColumn::Id.ne(exclude))
            .order_by_desc(ProductColumn::Rating)
            .limit(limit);

        self.products(select).await
    }
}
