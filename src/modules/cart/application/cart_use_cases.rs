use std::sync::Arc;

use crate::cart::application::ports::incoming::use_cases::{
    AddToCartUseCase, GetCartUseCase, RemoveCartItemUseCase, UpdateCartItemUseCase,
};

#[derive(Clone)]
pub struct CartUseCases {
    pub get: Arc<dyn GetCartUseCase + Send + Sync>,
    pub add: Arc<dyn AddToCartUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveCartItemUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCartItemUseCase + Send + Sync>,
}
