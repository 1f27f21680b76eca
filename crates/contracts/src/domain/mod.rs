pub mod common;

pub mod a001_organization;
pub mod a002_scrap_product;
pub mod a003_order;
pub mod a004_purchase;
