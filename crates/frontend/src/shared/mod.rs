pub mod async_op;
pub mod components;
pub mod export;
pub mod icons;
pub mod list_controller;
pub mod stats_bridge;
