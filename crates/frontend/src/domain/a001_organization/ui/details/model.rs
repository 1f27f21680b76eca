//! Mock persistence for the organization profile.
//!
//! The "backend" is localStorage behind a simulated latency; a stored
//! profile wins over the built-in seed.

use crate::shared::async_op::with_latency;
use contracts::domain::a001_organization::aggregate::{Organization, OrganizationDto};
use contracts::domain::common::AggregateId;

const PROFILE_STORAGE_KEY: &str = "scrapdz_organization_profile";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn seed_organization() -> Organization {
    Organization::new_for_insert(
        "ORG-001".into(),
        "EcoRecycle".into(),
        "SARL EcoRecycle DZ".into(),
        "16/00-1234567B22".into(),
        "000016123456789".into(),
        "0550123456".into(),
        "contact@ecorecycle.dz".into(),
        "12 Rue Didouche Mourad".into(),
        "Alger".into(),
    )
}

fn to_dto(org: &Organization) -> OrganizationDto {
    OrganizationDto {
        id: Some(org.base.id.as_string()),
        code: Some(org.base.code.clone()),
        description: org.base.description.clone(),
        full_name: org.full_name.clone(),
        trade_register: org.trade_register.clone(),
        tax_id: org.tax_id.clone(),
        phone: org.phone.clone(),
        email: org.email.clone(),
        address: org.address.clone(),
        wilaya: org.wilaya.clone(),
        comment: org.base.comment.clone(),
    }
}

pub async fn fetch_profile() -> Result<OrganizationDto, String> {
    let stored = storage()
        .and_then(|s| s.get_item(PROFILE_STORAGE_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str::<OrganizationDto>(&raw).ok());
    let dto = stored.unwrap_or_else(|| to_dto(&seed_organization()));
    with_latency(300, Ok(dto)).await
}

pub async fn save_profile(dto: &OrganizationDto) -> Result<(), String> {
    dto.validate()?;
    let json = serde_json::to_string(dto).map_err(|e| format!("{}", e))?;
    let result = match storage() {
        Some(s) => s
            .set_item(PROFILE_STORAGE_KEY, &json)
            .map_err(|_| "Could not persist the profile".to_string()),
        None => Err("Storage is not available".to_string()),
    };
    with_latency(600, result).await
}
