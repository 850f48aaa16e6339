pub mod admin_products;
pub mod browse;
mod dto;
pub mod reviews;

pub use admin_products::{
    create_product_handler, delete_product_handler, update_product_handler, ProductRequest,
};
pub use browse::{
    get_category_handler, get_product_handler, list_categories_handler, list_products_handler,
    related_products_handler, search_products_handler, SearchQuery,
};
pub use dto::{
    CategoryDetailResponse, CategoryResponse, ProductDetailResponse, ProductResponse,
    RelatedProductResponse, ReviewResponse,
};
pub use reviews::{
    create_review_handler, list_reviews_handler, vote_review_handler, CreateReviewRequest,
    VoteRequest,
};
