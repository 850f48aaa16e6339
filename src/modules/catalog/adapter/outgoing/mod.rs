pub mod catalog_query_postgres;
pub mod product_repository_postgres;
pub mod review_repository_postgres;
pub mod sea_orm_entity;

pub use catalog_query_postgres::CatalogQueryPostgres;
pub use product_repository_postgres::ProductRepositoryPostgres;
pub use review_repository_postgres::ReviewRepositoryPostgres;
