use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Eq, Hash, PartialEq)]
pub enum RecommendationCategory {
    #[serde(rename = "Architecture")]
    Architecture,
    #[serde(rename = "Performance")]
    Performance,
    #[serde(rename = "Security")]
    Security,
    #[serde(rename = "Testing")]
    Testing,
    #[serde(rename = "Maintainability")]
    Maintainability,
}
