use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entities::{Order, OrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStep {
    pub title: &'static str,
    pub description: &'static str,
    pub status: StepStatus,
    pub timestamp: Option<DateTime<Utc>>,
}

const STEPS: [(&str, &str); 4] = [
    (
        "Order Confirmed",
        "Your order has been confirmed and will be processed shortly",
    ),
    (
        "Order Processed",
        "Your items are being prepared for delivery",
    ),
    ("Out for Delivery", "Your order is on its way to you"),
    ("Delivered", "Package has been delivered"),
];

/// Index of the step an order in `status` has reached, `None` once cancelled.
fn reached_step(status: OrderStatus) -> Option<usize> {
    match status {
        OrderStatus::Pending => Some(0),
        OrderStatus::Processing => Some(1),
        OrderStatus::Shipped => Some(2),
        OrderStatus::Delivered => Some(3),
        OrderStatus::Cancelled => None,
    }
}

/// Four fixed steps. The confirmation step carries the order time and the
/// reached step carries the time of the last status change.
pub fn timeline(order: &Order) -> Vec<TimelineStep> {
    let reached = reached_step(order.status);

    STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, description))| {
            let status = match reached {
                Some(r) if i < r => StepStatus::Completed,
                Some(3) if i == 3 => StepStatus::Completed,
                Some(r) if i == r => StepStatus::Current,
                None if i == 0 => StepStatus::Completed,
                _ => StepStatus::Upcoming,
            };
            let timestamp = match (i, reached) {
                (0, _) => Some(order.created_at),
                (i, Some(r)) if i == r => Some(order.updated_at),
                _ => None,
            };

            TimelineStep {
                title,
                description,
                status,
                timestamp,
            }
        })
        .collect()
}
