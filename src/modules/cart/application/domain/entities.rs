use rust_decimal::Decimal;
use uuid::Uuid;

pub const MIN_LINE_QUANTITY: i32 = 1;

/// The product fields a cart line shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: Uuid,
    pub product: CartProduct,
    pub quantity: i32,
}

impl CartLine {
    pub fn total_price(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: Uuid,
    pub items: Vec<CartLine>,
}

impl Cart {
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartLine::total_price).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// An "add to cart" request against whatever line already exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddToCart {
    pub product_id: Uuid,
    pub quantity: i32,
    pub set_quantity: Option<i32>,
}

impl AddToCart {
    /// Quantity the line should hold afterwards.
    ///
    /// An existing line is replaced by `set_quantity` when given, otherwise
    /// `quantity` is added to it. A new line takes `quantity`. Never below 1.
    pub fn resolve(&self, existing: Option<i32>) -> i32 {
        let target = match (existing, self.set_quantity) {
            (Some(_), Some(set)) => set,
            (Some(current), None) => current.saturating_add(self.quantity),
            (None, _) => self.quantity,
        };
        target.max(MIN_LINE_QUANTITY)
    }
}
