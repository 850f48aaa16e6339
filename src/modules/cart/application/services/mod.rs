pub mod cart_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use cart_service::CartService;
