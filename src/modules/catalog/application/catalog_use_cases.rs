use std::sync::Arc;

use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductUseCase, CreateReviewUseCase, DeleteProductUseCase, GetCategoryUseCase,
    GetProductUseCase, ListCategoriesUseCase, ListProductsUseCase, ListReviewsUseCase,
    RelatedProductsUseCase, SearchProductsUseCase, UpdateProductUseCase, VoteReviewUseCase,
};

/// Catalog use cases exposed to the web layer.
#[derive(Clone)]
pub struct CatalogUseCases {
    pub list_categories: Arc<dyn ListCategoriesUseCase + Send + Sync>,
    pub get_category: Arc<dyn GetCategoryUseCase + Send + Sync>,
    pub list_products: Arc<dyn ListProductsUseCase + Send + Sync>,
    pub search_products: Arc<dyn SearchProductsUseCase + Send + Sync>,
    pub get_product: Arc<dyn GetProductUseCase + Send + Sync>,
    pub related_products: Arc<dyn RelatedProductsUseCase + Send + Sync>,
    pub list_reviews: Arc<dyn ListReviewsUseCase + Send + Sync>,
    pub create_review: Arc<dyn CreateReviewUseCase + Send + Sync>,
    pub vote_review: Arc<dyn VoteReviewUseCase + Send + Sync>,
    pub create_product: Arc<dyn CreateProductUseCase + Send + Sync>,
    pub update_product: Arc<dyn UpdateProductUseCase + Send + Sync>,
    pub delete_product: Arc<dyn DeleteProductUseCase + Send + Sync>,
}
