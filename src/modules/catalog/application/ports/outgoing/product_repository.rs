use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Nutrition, Product};

/// Validated product fields for an insert or a full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub category_id: Option<Uuid>,
    pub name: String,
    pub price: Decimal,
    pub rating: f64,
    pub description: String,
    pub image: String,
    pub weight: Option<String>,
    pub origin: Option<String>,
    pub organic: bool,
    pub storage: Option<String>,
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Product not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn category_exists(&self, id: Uuid) -> Result<bool, ProductRepositoryError>;

    async fn create(&self, data: ProductData) -> Result<Product, ProductRepositoryError>;

    /// Only active products can be updated.
    async fn update(&self, id: Uuid, data: ProductData) -> Result<Product, ProductRepositoryError>;

    /// Sets `is_active = false`. Already retired products are reported as missing.
    async fn deactivate(&self, id: Uuid) -> Result<(), ProductRepositoryError>;
}
