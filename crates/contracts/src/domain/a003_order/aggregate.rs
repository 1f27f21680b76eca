use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Lifecycle status of an order.
///
/// Delivered and Cancelled are terminal; everything else counts as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Stable wire/filter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InTransit => "in-transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::InTransit => "In transit",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::InTransit,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }
}

/// One entry of an order's status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEvent {
    pub status: OrderStatus,

    pub at: DateTime<Utc>,

    pub note: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Marketplace order placed by the current account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseAggregate<OrderId>,

    #[serde(rename = "productName")]
    pub product_name: String,

    /// The other party of the deal (seller for purchases, buyer for sales)
    pub counterparty: String,

    #[serde(rename = "quantityKg")]
    pub quantity_kg: f64,

    /// Price per kilogram, in DZD
    #[serde(rename = "unitPriceDzd")]
    pub unit_price_dzd: f64,

    /// Order total, in DZD
    #[serde(rename = "totalDzd")]
    pub total_dzd: f64,

    pub status: OrderStatus,

    /// Status transitions in chronological order; the first entry is the
    /// placement event.
    pub history: Vec<OrderEvent>,
}

impl Order {
    pub fn new_for_insert(
        code: String,
        product_name: String,
        counterparty: String,
        quantity_kg: f64,
        unit_price_dzd: f64,
        placed_at: DateTime<Utc>,
    ) -> Self {
        let mut base = BaseAggregate::new(OrderId::new_v4(), code, product_name.clone());
        base.metadata = EntityMetadata::at(placed_at);
        Self {
            base,
            product_name,
            counterparty,
            quantity_kg,
            unit_price_dzd,
            total_dzd: quantity_kg * unit_price_dzd,
            status: OrderStatus::Pending,
            history: vec![OrderEvent {
                status: OrderStatus::Pending,
                at: placed_at,
                note: Some("Order placed".into()),
            }],
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Advance to the next status, recording the transition.
    pub fn transition(&mut self, status: OrderStatus, at: DateTime<Utc>, note: Option<String>) {
        self.status = status;
        self.history.push(OrderEvent { status, at, note });
        self.base.touch();
    }

    /// Cancel an active order. Terminal orders cannot be cancelled.
    pub fn cancel(&mut self, at: DateTime<Utc>) -> Result<(), String> {
        if self.status.is_terminal() {
            return Err(format!(
                "Order {} is already {}",
                self.base.code,
                self.status.label()
            ));
        }
        self.transition(
            OrderStatus::Cancelled,
            at,
            Some("Cancelled by the user".into()),
        );
        Ok(())
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(code: &str) -> Order {
        Order::new_for_insert(
            code.into(),
            "Aluminium profiles".into(),
            "MetalPlus".into(),
            50.0,
            280.0,
            Utc::now(),
        )
    }

    #[test]
    fn test_new_order_is_active_with_placement_event() {
        let o = order("ORD-1");
        assert!(o.is_active());
        assert_eq!(o.history.len(), 1);
        assert_eq!(o.history[0].status, OrderStatus::Pending);
        assert_eq!(o.total_dzd, 14_000.0);
    }

    #[test]
    fn test_cancel_appends_history_and_terminates() {
        let mut o = order("ORD-2");
        o.cancel(Utc::now()).unwrap();
        assert_eq!(o.status, OrderStatus::Cancelled);
        assert!(!o.is_active());
        assert_eq!(o.history.last().unwrap().status, OrderStatus::Cancelled);
        assert_eq!(o.history.len(), 2);
    }

    #[test]
    fn test_cancel_rejected_for_terminal_orders() {
        let mut o = order("ORD-3");
        o.transition(OrderStatus::Delivered, Utc::now(), None);
        assert!(o.cancel(Utc::now()).is_err());
        // status and history untouched by the failed cancel
        assert_eq!(o.status, OrderStatus::Delivered);
        assert_eq!(o.history.len(), 2);
    }
}
