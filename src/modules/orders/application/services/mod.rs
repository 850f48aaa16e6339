pub mod order_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use order_service::OrderService;
