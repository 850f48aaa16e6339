use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Category, Product};
use crate::catalog::application::ports::incoming::use_cases::{
    BrowseCatalogError, CategoryDetail, GetCategoryUseCase, GetProductUseCase,
    ListCategoriesUseCase, ListProductsUseCase, ProductDetail, RelatedProductsUseCase,
    SearchProductsUseCase, RELATED_PRODUCTS_LIMIT, SEARCH_RESULT_LIMIT,
};
use crate::catalog::application::ports::outgoing::{
    CatalogQuery, CatalogQueryError, ReviewRepository, ReviewRepositoryError,
};

/// Public, read-only catalog browsing.
pub struct CatalogService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    query: Q,
    reviews: R,
}

impl<Q, R> CatalogService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    pub fn new(query: Q, reviews: R) -> Self {
        Self { query, reviews }
    }

    async fn active_product(&self, id: Uuid) -> Result<Product, BrowseCatalogError> {
        self.query
            .find_product(id)
            .await
            .map_err(query_err)?
            .ok_or(BrowseCatalogError::ProductNotFound)
    }
}

fn query_err(e: CatalogQueryError) -> BrowseCatalogError {
    match e {
        CatalogQueryError::DatabaseError(msg) => BrowseCatalogError::QueryError(msg),
    }
}

fn review_err(e: ReviewRepositoryError) -> BrowseCatalogError {
    BrowseCatalogError::QueryError(e.to_string())
}

#[async_trait]
impl<Q, R> ListCategoriesUseCase for CatalogService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    async fn execute(&self) -> Result<Vec<Category>, BrowseCatalogError> {
        self.query.list_categories().await.map_err(query_err)
    }
}

#[async_trait]
impl<Q, R> GetCategoryUseCase for CatalogService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    async fn execute(&self, slug: &str) -> Result<CategoryDetail, BrowseCatalogError> {
        let category = self
            .query
            .find_category_by_slug(slug)
            .await
            .map_err(query_err)?
            .ok_or(BrowseCatalogError::CategoryNotFound)?;

        let products = self
            .query
            .list_products(Some(category.id))
            .await
            .map_err(query_err)?;

        Ok(CategoryDetail { category, products })
    }
}

#[async_trait]
impl<Q, R> ListProductsUseCase for CatalogService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    async fn execute(&self) -> Result<Vec<Product>, BrowseCatalogError> {
        self.query.list_products(None).await.map_err(query_err)
    }
}

#[async_trait]
impl<Q, R> SearchProductsUseCase for CatalogService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    async fn execute(&self, query: &str) -> Result<Vec<Product>, BrowseCatalogError> {
        let term = query.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        self.query
            .search_products(term, SEARCH_RESULT_LIMIT)
            .await
            .map_err(query_err)
    }
}

#[async_trait]
impl<Q, R> GetProductUseCase for CatalogService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ProductDetail, BrowseCatalogError> {
        let product = self.active_product(id).await?;
        let reviews = self
            .reviews
            .list_for_product(product.id)
            .await
            .map_err(review_err)?;

        Ok(ProductDetail { product, reviews })
    }
}

#[async_trait]
impl<Q, R> RelatedProductsUseCase for CatalogService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    async fn execute(&self, id: Uuid) -> Result<Vec<Product>, BrowseCatalogError> {
        let product = self.active_product(id).await?;

        let Some(category_id) = product.category_id else {
            return Ok(Vec::new());
        };

        self.query
            .related_products(category_id, product.id, RELATED_PRODUCTS_LIMIT)
            .await
            .map_err(query_err)
    }
}
