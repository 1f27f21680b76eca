use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a scrap product listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScrapProductId(pub Uuid);

impl ScrapProductId {
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

impl AggregateId for ScrapProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ScrapProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Material category of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrapCategory {
    FerrousMetal,
    NonFerrousMetal,
    Plastic,
    Paper,
    Glass,
    Electronics,
}

impl ScrapCategory {
    /// Stable wire/filter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrapCategory::FerrousMetal => "ferrous-metal",
            ScrapCategory::NonFerrousMetal => "non-ferrous-metal",
            ScrapCategory::Plastic => "plastic",
            ScrapCategory::Paper => "paper",
            ScrapCategory::Glass => "glass",
            ScrapCategory::Electronics => "electronics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScrapCategory::FerrousMetal => "Ferrous metal",
            ScrapCategory::NonFerrousMetal => "Non-ferrous metal",
            ScrapCategory::Plastic => "Plastic",
            ScrapCategory::Paper => "Paper & cardboard",
            ScrapCategory::Glass => "Glass",
            ScrapCategory::Electronics => "Electronics",
        }
    }

    pub fn all() -> [ScrapCategory; 6] {
        [
            ScrapCategory::FerrousMetal,
            ScrapCategory::NonFerrousMetal,
            ScrapCategory::Plastic,
            ScrapCategory::Paper,
            ScrapCategory::Glass,
            ScrapCategory::Electronics,
        ]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Scrap product listing published by a seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapProduct {
    #[serde(flatten)]
    pub base: BaseAggregate<ScrapProductId>,

    pub category: ScrapCategory,

    /// Asking price per unit, in DZD
    #[serde(rename = "priceDzd")]
    pub price_dzd: f64,

    /// Pricing unit ("kg", "ton", "piece")
    pub unit: String,

    /// Available quantity in kilograms
    #[serde(rename = "quantityKg")]
    pub quantity_kg: f64,

    pub wilaya: String,

    #[serde(rename = "sellerName")]
    pub seller_name: String,

    /// Listing is currently purchasable
    pub available: bool,

    /// Starred by the current user
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

impl ScrapProduct {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        category: ScrapCategory,
        price_dzd: f64,
        unit: String,
        quantity_kg: f64,
        wilaya: String,
        seller_name: String,
        available: bool,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ScrapProductId::new_v4(), code, description),
            category,
            price_dzd,
            unit,
            quantity_kg,
            wilaya,
            seller_name,
            available,
            is_favorite: false,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Flip the favorite star. Returns the new state.
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.base.touch();
        self.is_favorite
    }
}

impl AggregateRoot for ScrapProduct {
    type Id = ScrapProductId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "scrap_product"
    }

    fn element_name() -> &'static str {
        "Scrap product"
    }

    fn list_name() -> &'static str {
        "Scrap products"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_favorite_flips_state() {
        let mut p = ScrapProduct::new_for_insert(
            "SP-1".into(),
            "Copper wire offcuts".into(),
            ScrapCategory::NonFerrousMetal,
            950.0,
            "kg".into(),
            120.0,
            "Alger".into(),
            "EcoRecycle".into(),
            true,
        );
        assert!(!p.is_favorite);
        assert!(p.toggle_favorite());
        assert!(!p.toggle_favorite());
    }

    #[test]
    fn test_category_wire_values_round_trip() {
        for cat in ScrapCategory::all() {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
            let back: ScrapCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }
}
