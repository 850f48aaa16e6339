use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Category, Product, Review};

pub const SEARCH_RESULT_LIMIT: u64 = 10;
pub const RELATED_PRODUCTS_LIMIT: u64 = 5;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseCatalogError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetail {
    pub category: Category,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub reviews: Vec<Review>,
}

#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, BrowseCatalogError>;
}

#[async_trait]
pub trait GetCategoryUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<CategoryDetail, BrowseCatalogError>;
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Product>, BrowseCatalogError>;
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    /// Blank queries yield an empty list.
    async fn execute(&self, query: &str) -> Result<Vec<Product>, BrowseCatalogError>;
}

#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ProductDetail, BrowseCatalogError>;
}

#[async_trait]
pub trait RelatedProductsUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Vec<Product>, BrowseCatalogError>;
}
