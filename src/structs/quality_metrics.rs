use serde::{Deserialize, Serialize};

/// Quality sub-scores on a 0-10 scale; coverage on 0-100. The overall
/// score is not recomputed from the sub-scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub overall_score: f64,
    pub maintainability: f64,
    pub reliability: f64,
    pub security: f64,
    pub performance: f64,
    pub test_coverage: u32,
}
