pub mod catalog_query;
pub mod product_repository;
pub mod review_repository;

pub use catalog_query::{CatalogQuery, CatalogQueryError};
pub use product_repository::{ProductData, ProductRepository, ProductRepositoryError};
pub use review_repository::{NewReview, ReviewRepository, ReviewRepositoryError};
