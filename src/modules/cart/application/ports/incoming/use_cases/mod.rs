mod manage_cart;

pub use manage_cart::{
    AddToCartCommand, AddToCartUseCase, CartCommandError, CartError, GetCartUseCase,
    RemoveCartItemUseCase, UpdateCartItemCommand, UpdateCartItemUseCase,
};
