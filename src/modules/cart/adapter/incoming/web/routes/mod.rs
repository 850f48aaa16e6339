pub mod cart;

pub use cart::{
    add_to_cart_handler, get_cart_handler, remove_cart_item_handler, update_cart_item_handler,
    AddToCartRequest, CartItemResponse, CartProductResponse, CartResponse, UpdateCartItemRequest,
};
