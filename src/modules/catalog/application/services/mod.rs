pub mod catalog_service;
pub mod product_admin_service;
pub mod review_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use catalog_service::CatalogService;
pub use product_admin_service::ProductAdminService;
pub use review_service::ReviewService;
