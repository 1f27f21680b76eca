pub mod seed;
pub mod ui;
