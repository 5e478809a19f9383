use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityTrendPoint {
    pub month: String,
    pub score: f64,
}
