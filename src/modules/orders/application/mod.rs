pub mod domain;
pub mod order_use_cases;
pub mod ports;
pub mod services;

pub use order_use_cases::OrderUseCases;
