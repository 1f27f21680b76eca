//! Tab labels — the single source of truth for tab titles.
//!
//! Aggregate tabs take their `list_name` from contracts; dashboards and
//! use cases are named here. Fallback: the key itself.

use contracts::domain::a001_organization::aggregate::Organization;
use contracts::domain::a002_scrap_product::aggregate::ScrapProduct;
use contracts::domain::a003_order::aggregate::Order;
use contracts::domain::a004_purchase::aggregate::Purchase;
use contracts::domain::common::AggregateRoot;

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates ────────────────────────────────────────────────────
        "a001_organization" => Organization::list_name(),
        "a002_scrap_product" => ScrapProduct::list_name(),
        "a003_order" => Order::list_name(),
        "a004_purchase" => Purchase::list_name(),

        // ── Dashboards ────────────────────────────────────────────────────
        "d100_overview" => "Overview",

        // ── Use cases ─────────────────────────────────────────────────────
        "u101_register_account" => "Create account",

        _ => "Unknown",
    }
}
