//! In-memory cart store shared by the cart tests.
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cart::application::domain::entities::{AddToCart, Cart, CartLine, CartProduct};
use crate::cart::application::ports::outgoing::{CartRepository, CartRepositoryError};

#[derive(Default)]
struct State {
    products: HashMap<Uuid, (CartProduct, bool)>,
    carts: HashMap<UserId, Cart>,
}

#[derive(Clone, Default)]
pub struct InMemoryCarts {
    state: Arc<Mutex<State>>,
}

impl InMemoryCarts {
    /// Registers a product priced in cents and returns its id.
    pub fn stock(&self, name: &str, cents: i64, active: bool) -> Uuid {
        let product = CartProduct {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            image: format!("https://cdn.example.com/{}.png", name.to_lowercase()),
        };
        let id = product.id;
        self.state
            .lock()
            .unwrap()
            .products
            .insert(id, (product, active));
        id
    }

    fn line_mut<'a>(state: &'a mut State, owner: UserId, line_id: Uuid) -> Option<&'a mut Cart> {
        state
            .carts
            .get_mut(&owner)
            .filter(|cart| cart.items.iter().any(|l| l.id == line_id))
    }
}

#[async_trait]
impl CartRepository for InMemoryCarts {
    async fn get_or_create(&self, owner: UserId) -> Result<Cart, CartRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Ok(state
            .carts
            .entry(owner)
            .or_insert_with(|| Cart {
                id: Uuid::new_v4(),
                items: Vec::new(),
            })
            .clone())
    }

    async fn add_line(&self, owner: UserId, request: AddToCart) -> Result<(), CartRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let product = match state.products.get(&request.product_id) {
            Some((product, true)) => product.clone(),
            _ => return Err(CartRepositoryError::ProductNotFound),
        };

        let cart = state.carts.entry(owner).or_insert_with(|| Cart {
            id: Uuid::new_v4(),
            items: Vec::new(),
        });

        match cart
            .items
            .iter_mut()
            .find(|l| l.product.id == request.product_id)
        {
            Some(line) => line.quantity = request.resolve(Some(line.quantity)),
            None => cart.items.push(CartLine {
                id: Uuid::new_v4(),
                product,
                quantity: request.resolve(None),
            }),
        }
        Ok(())
    }

    async fn remove_line(&self, owner: UserId, line_id: Uuid) -> Result<(), CartRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let cart = Self::line_mut(&mut state, owner, line_id)
            .ok_or(CartRepositoryError::LineNotFound)?;
        cart.items.retain(|l| l.id != line_id);
        Ok(())
    }

    async fn set_line_quantity(
        &self,
        owner: UserId,
        line_id: Uuid,
        quantity: i32,
    ) -> Result<(), CartRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let cart = Self::line_mut(&mut state, owner, line_id)
            .ok_or(CartRepositoryError::LineNotFound)?;
        if let Some(line) = cart.items.iter_mut().find(|l| l.id == line_id) {
            line.quantity = quantity;
        }
        Ok(())
    }
}
