use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the analytics comparison table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryComparison {
    pub name: String,
    pub quality_score: f64,
    pub issues: u32,
    pub coverage: u32,
    pub last_updated: DateTime<Utc>,
}
