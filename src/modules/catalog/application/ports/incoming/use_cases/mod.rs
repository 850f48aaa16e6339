mod browse_catalog;
mod manage_products;
mod reviews;

pub use browse_catalog::{
    BrowseCatalogError, CategoryDetail, GetCategoryUseCase, GetProductUseCase,
    ListCategoriesUseCase, ListProductsUseCase, ProductDetail, RelatedProductsUseCase,
    SearchProductsUseCase, RELATED_PRODUCTS_LIMIT, SEARCH_RESULT_LIMIT,
};
pub use manage_products::{
    CreateProductUseCase, DeleteProductUseCase, ManageProductError, ProductCommand,
    ProductCommandError, ProductFields, UpdateProductUseCase,
};
pub use reviews::{
    CreateReviewCommand, CreateReviewCommandError, CreateReviewUseCase, ListReviewsUseCase,
    ReviewError, VoteReviewUseCase,
};
