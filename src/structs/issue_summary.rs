use serde::{Deserialize, Serialize};

use crate::structs::issue::Issue;

/// Counts by severity plus the item list. `total` is part of the canned
/// summary and is not derived from the four counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    pub critical: u32,
    pub major: u32,
    pub minor: u32,
    pub info: u32,
    pub total: u32,
    pub items: Vec<Issue>,
}
