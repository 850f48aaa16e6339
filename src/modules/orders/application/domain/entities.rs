use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Status must be one of: pending, processing, shipped, delivered, cancelled")]
pub struct InvalidOrderStatus;

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(InvalidOrderStatus)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product as currently listed in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderProduct {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product: OrderProduct,
    pub quantity: i32,
    /// Unit price frozen at checkout.
    pub price: Decimal,
}

impl OrderItem {
    pub fn total_price(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub order_id: String,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub total: Decimal,
    pub discount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order_id: String,
    pub total: Decimal,
    pub discount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeliverySlot {
    pub id: u8,
    pub time: &'static str,
    pub available: bool,
}

pub const DELIVERY_SLOTS: [DeliverySlot; 4] = [
    DeliverySlot {
        id: 1,
        time: "9:00 AM - 11:00 AM",
        available: true,
    },
    DeliverySlot {
        id: 2,
        time: "11:00 AM - 1:00 PM",
        available: true,
    },
    DeliverySlot {
        id: 3,
        time: "2:00 PM - 4:00 PM",
        available: true,
    },
    DeliverySlot {
        id: 4,
        time: "4:00 PM - 6:00 PM",
        available: false,
    },
];
