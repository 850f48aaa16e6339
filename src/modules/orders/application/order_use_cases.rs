use std::sync::Arc;

use crate::orders::application::ports::incoming::use_cases::{
    CheckoutUseCase, GetOrderUseCase, ListOrdersUseCase, UpdateOrderStatusUseCase,
};

#[derive(Clone)]
pub struct OrderUseCases {
    pub checkout: Arc<dyn CheckoutUseCase + Send + Sync>,
    pub list: Arc<dyn ListOrdersUseCase + Send + Sync>,
    pub get: Arc<dyn GetOrderUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateOrderStatusUseCase + Send + Sync>,
}
