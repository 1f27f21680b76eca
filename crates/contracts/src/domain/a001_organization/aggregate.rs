use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::{is_valid_email, is_valid_phone_dz};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a seller organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationId(pub Uuid);

impl OrganizationId {
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

impl AggregateId for OrganizationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrganizationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Seller organization profile (legal identity of a marketplace account)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(flatten)]
    pub base: BaseAggregate<OrganizationId>,

    /// Full legal name
    #[serde(rename = "fullName")]
    pub full_name: String,

    /// Trade register number (RC)
    #[serde(rename = "tradeRegister")]
    pub trade_register: String,

    /// Fiscal identification number (NIF)
    #[serde(rename = "taxId")]
    pub tax_id: String,

    pub phone: String,

    pub email: String,

    pub address: String,

    /// Wilaya the organization operates from
    pub wilaya: String,
}

impl Organization {
    pub fn new_for_insert(
        code: String,
        description: String,
        full_name: String,
        trade_register: String,
        tax_id: String,
        phone: String,
        email: String,
        address: String,
        wilaya: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(OrganizationId::new_v4(), code, description),
            full_name,
            trade_register,
            tax_id,
            phone,
            email,
            address,
            wilaya,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply an edited DTO back onto the aggregate.
    pub fn update(&mut self, dto: &OrganizationDto) {
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.full_name = dto.full_name.clone();
        self.trade_register = dto.trade_register.clone();
        self.tax_id = dto.tax_id.clone();
        self.phone = dto.phone.clone();
        self.email = dto.email.clone();
        self.address = dto.address.clone();
        self.wilaya = dto.wilaya.clone();
        self.base.touch();
    }
}

impl AggregateRoot for Organization {
    type Id = OrganizationId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "organization"
    }

    fn element_name() -> &'static str {
        "Organization"
    }

    fn list_name() -> &'static str {
        "Organization profile"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO backing the organization profile form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrganizationDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "tradeRegister")]
    pub trade_register: String,
    #[serde(rename = "taxId")]
    pub tax_id: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub wilaya: String,
    pub comment: Option<String>,
}

impl OrganizationDto {
    /// Field-level validation; returns the first error per call.
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.full_name.trim().is_empty() {
            return Err("Full legal name is required".into());
        }
        if self.trade_register.trim().is_empty() {
            return Err("Trade register number is required".into());
        }
        if !is_valid_email(&self.email) {
            return Err("Email address is not valid".into());
        }
        if !is_valid_phone_dz(&self.phone) {
            return Err("Phone number is not a valid Algerian number".into());
        }
        if self.wilaya.trim().is_empty() {
            return Err("Wilaya is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> OrganizationDto {
        OrganizationDto {
            description: "EcoRecycle".into(),
            full_name: "SARL EcoRecycle DZ".into(),
            trade_register: "16/00-1234567B22".into(),
            tax_id: "000016123456789".into(),
            phone: "0550123456".into(),
            email: "contact@ecorecycle.dz".into(),
            address: "12 Rue Didouche Mourad".into(),
            wilaya: "Alger".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let mut dto = valid_dto();
        dto.description = "  ".into();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.trade_register = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_email_and_phone_rejected() {
        let mut dto = valid_dto();
        dto.email = "not-an-email".into();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.phone = "12345".into();
        assert!(dto.validate().is_err());
    }
}
