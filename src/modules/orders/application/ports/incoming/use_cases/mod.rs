mod manage_orders;

pub use manage_orders::{
    CheckoutCommand, CheckoutUseCase, GetOrderUseCase, ListOrdersUseCase, OrderActor, OrderError,
    UpdateOrderStatusCommand, UpdateOrderStatusUseCase,
};
