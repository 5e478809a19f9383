use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum IssueCategory {
    #[serde(rename = "security")]
    Security,
    #[serde(rename = "performance")]
    Performance,
    #[serde(rename = "quality")]
    Quality,
    #[serde(rename = "style")]
    Style,
}
