//! Cross-view order statistics snapshot.
//!
//! The orders view publishes this after every mutation; the sidebar badge
//! and the overview dashboard consume it through the notification bridge.
//! The serialized form is the single shared `localStorage` payload, so every
//! field is optional on the wire and defaults to a zero/down value.

use crate::domain::a003_order::aggregate::{Order, OrderStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendingTrend {
    Up,
    #[default]
    Down,
}

/// Aggregate counts derived from the order collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderStats {
    pub total: u32,

    /// Orders not yet delivered or cancelled
    pub active: u32,

    pub completed: u32,

    /// Count shown on the sidebar badge (currently the active count)
    pub sidebar_badge: u32,

    /// Sum of non-cancelled order totals, in DZD
    pub total_spending: f64,

    pub spending_trend: SpendingTrend,

    /// Spending change of the last 30 days against the 30 days before,
    /// as an absolute percentage
    pub spending_percentage: f64,
}

impl OrderStats {
    /// Parse a stored snapshot. Malformed or missing input degrades to the
    /// zeroed default; this path must never fail.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Recompute the snapshot from the full order collection.
    ///
    /// `now` anchors the trend windows so callers (and tests) control time.
    pub fn from_orders(orders: &[Order], now: DateTime<Utc>) -> Self {
        let total = orders.len() as u32;
        let active = orders.iter().filter(|o| o.is_active()).count() as u32;
        let completed = total - active;

        let spending = |o: &&Order| o.status != OrderStatus::Cancelled;
        let total_spending: f64 = orders.iter().filter(spending).map(|o| o.total_dzd).sum();

        let month_ago = now - Duration::days(30);
        let two_months_ago = now - Duration::days(60);
        let recent: f64 = orders
            .iter()
            .filter(spending)
            .filter(|o| o.base.metadata.created_at > month_ago)
            .map(|o| o.total_dzd)
            .sum();
        let previous: f64 = orders
            .iter()
            .filter(spending)
            .filter(|o| {
                o.base.metadata.created_at > two_months_ago
                    && o.base.metadata.created_at <= month_ago
            })
            .map(|o| o.total_dzd)
            .sum();

        let (spending_trend, spending_percentage) = if previous > 0.0 {
            let delta = (recent - previous) / previous * 100.0;
            let trend = if delta >= 0.0 {
                SpendingTrend::Up
            } else {
                SpendingTrend::Down
            };
            (trend, delta.abs())
        } else if recent > 0.0 {
            (SpendingTrend::Up, 100.0)
        } else {
            (SpendingTrend::Down, 0.0)
        };

        Self {
            total,
            active,
            completed,
            sidebar_badge: active,
            total_spending,
            spending_trend,
            spending_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_at(code: &str, total: f64, days_ago: i64, now: DateTime<Utc>) -> Order {
        Order::new_for_insert(
            code.into(),
            "Mixed scrap".into(),
            "RecycAll".into(),
            total / 100.0,
            100.0,
            now - Duration::days(days_ago),
        )
    }

    #[test]
    fn test_malformed_snapshot_falls_back_to_default() {
        assert_eq!(OrderStats::from_json("not json"), OrderStats::default());
        assert_eq!(OrderStats::from_json(""), OrderStats::default());
    }

    #[test]
    fn test_partial_snapshot_defaults_missing_fields() {
        let stats = OrderStats::from_json(r#"{"total": 4, "active": 2}"#);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.spending_trend, SpendingTrend::Down);
        assert_eq!(stats.spending_percentage, 0.0);
    }

    #[test]
    fn test_snapshot_round_trip_is_camel_case() {
        let now = Utc::now();
        let stats = OrderStats::from_orders(&[order_at("ORD-1", 5_000.0, 3, now)], now);
        let json = stats.to_json();
        assert!(json.contains("sidebarBadge"));
        assert!(json.contains("totalSpending"));
        assert_eq!(OrderStats::from_json(&json), stats);
    }

    #[test]
    fn test_cancel_moves_one_active_to_completed() {
        let now = Utc::now();
        let mut orders = vec![
            order_at("ORD-1", 5_000.0, 3, now),
            order_at("ORD-2", 8_000.0, 10, now),
        ];
        orders[1].transition(OrderStatus::Delivered, now, None);

        let before = OrderStats::from_orders(&orders, now);
        assert_eq!((before.active, before.completed), (1, 1));

        orders[0].cancel(now).unwrap();
        let after = OrderStats::from_orders(&orders, now);
        assert_eq!(after.active, before.active - 1);
        assert_eq!(after.completed, before.completed + 1);
        assert_eq!(after.sidebar_badge, after.active);
        // cancelled orders stop counting toward spending
        assert_eq!(after.total_spending, 8_000.0);
    }

    #[test]
    fn test_spending_trend_compares_monthly_windows() {
        let now = Utc::now();
        // 12k this month vs 8k the month before -> up 50%
        let orders = vec![
            order_at("ORD-1", 12_000.0, 5, now),
            order_at("ORD-2", 8_000.0, 45, now),
        ];
        let stats = OrderStats::from_orders(&orders, now);
        assert_eq!(stats.spending_trend, SpendingTrend::Up);
        assert!((stats.spending_percentage - 50.0).abs() < 1e-9);
    }
}
