use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Category, Product};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the catalog. Every product method only sees active products.
#[async_trait]
pub trait CatalogQuery: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogQueryError>;

    async fn find_category_by_slug(&self, slug: &str)
        -> Result<Option<Category>, CatalogQueryError>;

    /// All active products, optionally restricted to one category.
    async fn list_products(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<Product>, CatalogQueryError>;

    /// Case-insensitive substring match on the product name.
    async fn search_products(
        &self,
        term: &str,
        limit: u64,
    ) -> Result<Vec<Product>, CatalogQueryError>;

    async fn find_product(&self, id: Uuid) -> Result<Option<Product>, CatalogQueryError>;

    async fn related_products(
        &self,
        category_id: Uuid,
        exclude: Uuid,
        limit: u64,
    ) -> Result<Vec<Product>, CatalogQueryError>;
}
