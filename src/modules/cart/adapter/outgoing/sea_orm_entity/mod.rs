pub mod cart_items;
pub mod carts;
