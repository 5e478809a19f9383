use serde::{Deserialize, Serialize};

use crate::enums::trend_direction::TrendDirection;

/// Headline stat card on the analytics page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverallStat {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: TrendDirection,
    pub description: String,
}
