//! Seed purchase history of the current account.

use chrono::{Duration, Utc};
use contracts::domain::a004_purchase::aggregate::{Purchase, PurchaseStatus};

pub fn seed_purchases() -> Vec<Purchase> {
    let rows: [(&str, &str, &str, f64, PurchaseStatus); 8] = [
        ("1", "Cardboard bales", "PaperCycle DZ", 10_000.0, PurchaseStatus::Buyed),
        ("2", "Office paper, sorted white", "PaperCycle DZ", 15_000.0, PurchaseStatus::Pending),
        ("3", "HDPE crates, mixed colors", "PlastiCollect", 25_000.0, PurchaseStatus::Buyed),
        ("4", "Window glass, laminated", "VerreVert", 8_000.0, PurchaseStatus::Refused),
        ("5", "Glass cullet, clear", "VerreVert", 5_000.0, PurchaseStatus::Buyed),
        ("6", "PET bottle bales", "PlastiCollect", 12_000.0, PurchaseStatus::Pending),
        ("7", "Cast iron radiators", "FerroAnnaba", 30_000.0, PurchaseStatus::Refused),
        ("8", "Steel beams, demolition grade", "DemoBat SARL", 18_000.0, PurchaseStatus::Pending),
    ];

    let now = Utc::now();
    rows.iter()
        .enumerate()
        .map(|(i, (code, product, seller, price, status))| {
            Purchase::new_for_insert(
                (*code).to_string(),
                (*product).to_string(),
                (*seller).to_string(),
                *price,
                *status,
                now - Duration::days(3 * i as i64 + 2),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_three_buyed_entries() {
        let purchases = seed_purchases();
        assert_eq!(purchases.len(), 8);
        let buyed: Vec<&str> = purchases
            .iter()
            .filter(|p| p.status == PurchaseStatus::Buyed)
            .map(|p| p.base.code.as_str())
            .collect();
        assert_eq!(buyed, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_seed_price_values() {
        let prices: Vec<f64> = seed_purchases().iter().map(|p| p.price_dzd).collect();
        assert_eq!(
            prices,
            vec![10_000.0, 15_000.0, 25_000.0, 8_000.0, 5_000.0, 12_000.0, 30_000.0, 18_000.0]
        );
    }
}
