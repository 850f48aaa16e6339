//! In-memory order store for service and route tests.
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::orders::application::domain::entities::{
    Order, OrderItem, OrderProduct, OrderStatus, PlacedOrder,
};
use crate::orders::application::domain::pricing::quote;
use crate::orders::application::ports::outgoing::{OrderRepository, OrderRepositoryError};

#[derive(Default)]
struct State {
    carts: HashMap<UserId, Vec<(OrderProduct, i32)>>,
    orders: Vec<Order>,
}

#[derive(Clone, Default)]
pub struct InMemoryOrders {
    state: Arc<Mutex<State>>,
}

impl InMemoryOrders {
    /// Puts `quantity` of a product priced in cents into `owner`'s cart.
    pub fn put_in_cart(&self, owner: UserId, name: &str, cents: i64, quantity: i32) -> Uuid {
        let product = OrderProduct {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            image: format!("https://cdn.example.com/{}.png", name.to_lowercase()),
        };
        let id = product.id;
        self.state
            .lock()
            .unwrap()
            .carts
            .entry(owner)
            .or_default()
            .push((product, quantity));
        id
    }

    pub fn cart_len(&self, owner: UserId) -> usize {
        self.state
            .lock()
            .unwrap()
            .carts
            .get(&owner)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn checkout(
        &self,
        owner: UserId,
        order_number: String,
        promo_code: Option<String>,
    ) -> Result<PlacedOrder, OrderRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let lines = state.carts.remove(&owner).unwrap_or_default();
        if lines.is_empty() {
            return Err(OrderRepositoryError::CartEmpty);
        }

        let q = quote(
            lines.iter().map(|(p, quantity)| (p.price, *quantity)),
            promo_code.as_deref(),
        );
        let now = Utc::now();
        state.orders.push(Order {
            id: Uuid::new_v4(),
            order_id: order_number.clone(),
            user_id: owner,
            status: OrderStatus::Pending,
            total: q.total,
            discount: q.discount,
            created_at: now,
            updated_at: now,
            items: lines
                .into_iter()
                .map(|(product, quantity)| OrderItem {
                    price: product.price,
                    product,
                    quantity,
                })
                .collect(),
        });

        Ok(PlacedOrder {
            order_id: order_number,
            total: q.total,
            discount: q.discount,
        })
    }

    async fn list_for_user(&self, owner: UserId) -> Result<Vec<Order>, OrderRepositoryError> {
        let state = self.state.lock().unwrap();
        let mut orders: Vec<Order> = state
            .orders
            .iter()
            .filter(|o| o.user_id == owner)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn find_for_user(
        &self,
        owner: UserId,
        order_number: &str,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .orders
            .iter()
            .find(|o| o.user_id == owner && o.order_id == order_number)
            .cloned())
    }

    async fn update_status(
        &self,
        order_number: &str,
        owner: Option<UserId>,
        status: OrderStatus,
    ) -> Result<(), OrderRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let order = state
            .orders
            .iter_mut()
            .find(|o| o.order_id == order_number && owner.map_or(true, |u| o.user_id == u))
            .ok_or(OrderRepositoryError::NotFound)?;
        order.status = status;
        order.updated_at = Utc::now();
        Ok(())
    }
}
