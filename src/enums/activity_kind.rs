use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq)]
pub enum ActivityKind {
    #[serde(rename = "analysis")]
    Analysis,
    #[serde(rename = "security")]
    Security,
    #[serde(rename = "performance")]
    Performance,
}
