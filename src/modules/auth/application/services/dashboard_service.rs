use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    Dashboard, DashboardError, DashboardUseCase, MonthlySpend, RecentOrder,
};
use crate::auth::application::ports::outgoing::{OrderHistoryQuery, OrderSummary};

const RECENT_ORDERS: usize = 5;

pub struct DashboardService<O>
where
    O: OrderHistoryQuery,
{
    orders: O,
}

impl<O> DashboardService<O>
where
    O: OrderHistoryQuery,
{
    pub fn new(orders: O) -> Self {
        Self { orders }
    }
}

/// `orders` must be newest first.
fn summarize(orders: Vec<OrderSummary>) -> Dashboard {
    let total_spent = orders.iter().map(|o| o.total).sum::<Decimal>();

    let mut by_month: BTreeMap<String, Decimal> = BTreeMap::new();
    for order in &orders {
        *by_month
            .entry(order.created_at.format("%Y-%m").to_string())
            .or_default() += order.total;
    }

    let total_orders = orders.len();
    let recent_orders = orders
        .into_iter()
        .take(RECENT_ORDERS)
        .map(|o| RecentOrder {
            id: o.order_id,
            date: o.created_at,
            status: o.status,
            total: o.total,
        })
        .collect();

    Dashboard {
        total_orders,
        total_spent,
        recent_orders,
        spending_trends: by_month
            .into_iter()
            .map(|(month, amount)| MonthlySpend { month, amount })
            .collect(),
    }
}

#[async_trait]
impl<O> DashboardUseCase for DashboardService<O>
where
    O: OrderHistoryQuery,
{
    async fn execute(&self, user_id: UserId) -> Result<Dashboard, DashboardError> {
        let orders = self
            .orders
            .list_for_user(user_id)
            .await
            .map_err(|e| DashboardError::QueryError(e.to_string()))?;

        Ok(summarize(orders))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(n: u32, year: i32, month: u32, total: i64) -> OrderSummary {
        OrderSummary {
            order_id: format!("ORD-{n}"),
            status: "pending".to_string(),
            total: Decimal::new(total, 2),
            created_at: Utc.with_ymd_and_hms(year, month, 10, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_history() {
        let dashboard = summarize(vec![]);

        assert_eq!(dashboard.total_orders, 0);
        assert_eq!(dashboard.total_spent, Decimal::ZERO);
        assert!(dashboard.recent_orders.is_empty());
        assert!(dashboard.spending_trends.is_empty());
    }

    #[test]
    fn totals_recent_and_monthly_trend() {
        // newest first, spanning a year boundary
        let orders = vec![
            order(7, 2025, 2, 1000),
            order(6, 2025, 1, 250),
            order(5, 2025, 1, 250),
            order(4, 2024, 12, 100),
            order(3, 2024, 12, 100),
            order(2, 2024, 11, 999),
            order(1, 2024, 11, 1),
        ];

        let dashboard = summarize(orders);

        assert_eq!(dashboard.total_orders, 7);
        assert_eq!(dashboard.total_spent, Decimal::new(2700, 2));

        let recent: Vec<_> = dashboard
            .recent_orders
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(recent, ["ORD-7", "ORD-6", "ORD-5", "ORD-4", "ORD-3"]);

        let months: Vec<_> = dashboard
            .spending_trends
            .iter()
            .map(|m| (m.month.as_str(), m.amount))
            .collect();
        assert_eq!(
            months,
            [
                ("2024-11", Decimal::new(1000, 2)),
                ("2024-12", Decimal::new(200, 2)),
                ("2025-01", Decimal::new(500, 2)),
                ("2025-02", Decimal::new(1000, 2)),
            ]
        );
    }
}
