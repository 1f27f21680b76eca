//! Seed orders for the current account. Dates are spread over two months so
//! the spending trend has a previous window to compare against.

use chrono::{Duration, Utc};
use contracts::domain::a003_order::aggregate::{Order, OrderStatus};

pub fn seed_orders() -> Vec<Order> {
    let rows: [(&str, &str, &str, f64, f64, i64, OrderStatus); 8] = [
        // code, product, counterparty, quantity (kg), unit price (DZD/kg), placed N days ago, status
        ("ORD-001", "Cardboard bales", "PaperCycle DZ", 800.0, 14.0, 2, OrderStatus::Pending),
        ("ORD-002", "Copper wire offcuts", "CuivrOr", 50.0, 820.0, 5, OrderStatus::Confirmed),
        ("ORD-003", "HDPE crates, mixed colors", "PlastiCollect", 400.0, 38.0, 9, OrderStatus::InTransit),
        ("ORD-004", "Steel beams, demolition grade", "DemoBat SARL", 1_500.0, 42.0, 14, OrderStatus::Delivered),
        ("ORD-005", "Glass cullet, clear", "VerreVert", 2_000.0, 9.5, 21, OrderStatus::Delivered),
        ("ORD-006", "Aluminium profiles", "AluEst", 300.0, 210.0, 35, OrderStatus::Delivered),
        ("ORD-007", "PET bottle bales", "PlastiCollect", 500.0, 62.0, 42, OrderStatus::Cancelled),
        ("ORD-008", "Brass fittings", "CuivrOr", 80.0, 530.0, 55, OrderStatus::Delivered),
    ];

    let now = Utc::now();
    rows.iter()
        .map(|(code, product, counterparty, qty, price, days_ago, status)| {
            let placed_at = now - Duration::days(*days_ago);
            let mut o = Order::new_for_insert(
                (*code).to_string(),
                (*product).to_string(),
                (*counterparty).to_string(),
                *qty,
                *price,
                placed_at,
            );
            // Walk the order to its seeded status, one day per hop, so the
            // history reads like a real lifecycle.
            let steps: &[OrderStatus] = match status {
                OrderStatus::Pending => &[],
                OrderStatus::Confirmed => &[OrderStatus::Confirmed],
                OrderStatus::InTransit => &[OrderStatus::Confirmed, OrderStatus::InTransit],
                OrderStatus::Delivered => &[
                    OrderStatus::Confirmed,
                    OrderStatus::InTransit,
                    OrderStatus::Delivered,
                ],
                OrderStatus::Cancelled => &[OrderStatus::Cancelled],
            };
            for (i, step) in steps.iter().enumerate() {
                o.transition(*step, placed_at + Duration::days(i as i64 + 1), None);
            }
            o
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::shared::order_stats::OrderStats;

    #[test]
    fn test_seed_status_mix() {
        let orders = seed_orders();
        assert_eq!(orders.len(), 8);
        assert_eq!(orders.iter().filter(|o| o.is_active()).count(), 3);
        assert_eq!(orders.iter().filter(|o| !o.is_active()).count(), 5);
    }

    #[test]
    fn test_seed_histories_end_at_current_status() {
        for o in seed_orders() {
            assert_eq!(o.history.last().map(|e| e.status), Some(o.status));
        }
    }

    #[test]
    fn test_seed_stats_badge_matches_active() {
        let orders = seed_orders();
        let stats = OrderStats::from_orders(&orders, Utc::now());
        assert_eq!(stats.total, 8);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.completed, 5);
        assert_eq!(stats.sidebar_badge, 3);
    }
}
