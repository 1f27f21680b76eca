//! Display metadata for dashboard stat cards

use serde::{Deserialize, Serialize};

/// Visual status of an indicator tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Warning,
    Neutral,
}

/// How a stat card formats its primary value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}
