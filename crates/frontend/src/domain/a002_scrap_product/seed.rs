//! Seed catalog for the products view. Created at view mount and mutated
//! only by local user actions; discarded on navigation away.

use chrono::{Duration, Utc};
use contracts::domain::a002_scrap_product::aggregate::{ScrapCategory, ScrapProduct};

pub fn seed_products() -> Vec<ScrapProduct> {
    let rows: [(&str, &str, ScrapCategory, f64, f64, &str, &str, bool); 12] = [
        // code, description, category, price per ton (DZD), quantity (kg), wilaya, seller, available
        ("SP-001", "Steel beams, demolition grade", ScrapCategory::FerrousMetal, 42_000.0, 3_500.0, "Alger", "DemoBat SARL", true),
        ("SP-002", "Copper wire offcuts", ScrapCategory::NonFerrousMetal, 820_000.0, 120.0, "Oran", "CuivrOr", true),
        ("SP-003", "HDPE crates, mixed colors", ScrapCategory::Plastic, 38_000.0, 900.0, "Blida", "PlastiCollect", true),
        ("SP-004", "Cardboard bales", ScrapCategory::Paper, 14_000.0, 2_200.0, "Alger", "PaperCycle DZ", true),
        ("SP-005", "Aluminium profiles", ScrapCategory::NonFerrousMetal, 210_000.0, 640.0, "Constantine", "AluEst", true),
        ("SP-006", "Glass cullet, clear", ScrapCategory::Glass, 9_500.0, 5_000.0, "Setif", "VerreVert", false),
        ("SP-007", "Cast iron radiators", ScrapCategory::FerrousMetal, 55_000.0, 1_800.0, "Annaba", "FerroAnnaba", true),
        ("SP-008", "PET bottle bales", ScrapCategory::Plastic, 62_000.0, 1_100.0, "Oran", "PlastiCollect", true),
        ("SP-009", "Office paper, sorted white", ScrapCategory::Paper, 26_000.0, 750.0, "Alger", "PaperCycle DZ", false),
        ("SP-010", "Computer mainboards", ScrapCategory::Electronics, 480_000.0, 85.0, "Alger", "E-Dechet", true),
        ("SP-011", "Brass fittings", ScrapCategory::NonFerrousMetal, 530_000.0, 210.0, "Blida", "CuivrOr", true),
        ("SP-012", "Window glass, laminated", ScrapCategory::Glass, 7_000.0, 3_300.0, "Constantine", "VerreVert", true),
    ];

    let now = Utc::now();
    rows.iter()
        .enumerate()
        .map(|(i, (code, descr, category, price, qty, wilaya, seller, available))| {
            let mut p = ScrapProduct::new_for_insert(
                (*code).to_string(),
                (*descr).to_string(),
                *category,
                *price,
                "ton".to_string(),
                *qty,
                (*wilaya).to_string(),
                (*seller).to_string(),
                *available,
            );
            // Spread listing dates so the date sort has something to do.
            p.base.metadata = contracts::domain::common::EntityMetadata::at(
                now - Duration::days(2 * i as i64 + 1),
            );
            p
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_codes_are_unique() {
        let products = seed_products();
        let mut codes: Vec<_> = products.iter().map(|p| p.base.code.clone()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), products.len());
    }

    #[test]
    fn test_seed_covers_every_category() {
        let products = seed_products();
        for cat in ScrapCategory::all() {
            assert!(
                products.iter().any(|p| p.category == cat),
                "no seed product for {:?}",
                cat
            );
        }
    }
}
