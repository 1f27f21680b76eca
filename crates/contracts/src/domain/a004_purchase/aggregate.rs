use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a purchase-history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseId(pub Uuid);

impl PurchaseId {
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

impl AggregateId for PurchaseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PurchaseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Settlement status of a purchase.
///
/// The wire values ("buyed" included) predate this module and are kept
/// verbatim: they appear in stored snapshots and exported files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Buyed,
    Pending,
    Refused,
}

impl PurchaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::Buyed => "buyed",
            PurchaseStatus::Pending => "pending",
            PurchaseStatus::Refused => "refused",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PurchaseStatus::Buyed => "Bought",
            PurchaseStatus::Pending => "Pending",
            PurchaseStatus::Refused => "Refused",
        }
    }

    pub fn all() -> [PurchaseStatus; 3] {
        [
            PurchaseStatus::Buyed,
            PurchaseStatus::Pending,
            PurchaseStatus::Refused,
        ]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One line of the account's purchase history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(flatten)]
    pub base: BaseAggregate<PurchaseId>,

    #[serde(rename = "productName")]
    pub product_name: String,

    #[serde(rename = "sellerName")]
    pub seller_name: String,

    /// Agreed price, in DZD
    #[serde(rename = "priceDzd")]
    pub price_dzd: f64,

    pub status: PurchaseStatus,

    #[serde(rename = "purchasedAt")]
    pub purchased_at: DateTime<Utc>,
}

impl Purchase {
    pub fn new_for_insert(
        code: String,
        product_name: String,
        seller_name: String,
        price_dzd: f64,
        status: PurchaseStatus,
        purchased_at: DateTime<Utc>,
    ) -> Self {
        let mut base = BaseAggregate::new(PurchaseId::new_v4(), code, product_name.clone());
        base.metadata = EntityMetadata::at(purchased_at);
        Self {
            base,
            product_name,
            seller_name,
            price_dzd,
            status,
            purchased_at,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for Purchase {
    type Id = PurchaseId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "purchase"
    }

    fn element_name() -> &'static str {
        "Purchase"
    }

    fn list_name() -> &'static str {
        "Purchase history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&PurchaseStatus::Buyed).unwrap(),
            "\"buyed\""
        );
        let back: PurchaseStatus = serde_json::from_str("\"refused\"").unwrap();
        assert_eq!(back, PurchaseStatus::Refused);
    }
}
