pub mod orders;

pub use orders::{
    checkout_handler, delivery_times_handler, get_order_handler, list_orders_handler,
    update_order_status_handler, CheckoutRequest, CheckoutResponse, DeliverySlotResponse,
    OrderDetailResponse, OrderItemResponse, OrderProductResponse, OrderResponse,
    TimelineStepResponse, UpdateOrderStatusRequest,
};
