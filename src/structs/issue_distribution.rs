use serde::{Deserialize, Serialize};

/// Issue-category slice for the distribution chart, with its display
/// color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IssueDistribution {
    pub category: String,
    pub count: u32,
    pub color: String,
}
