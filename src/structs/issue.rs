use serde::{Deserialize, Serialize};

use crate::enums::issue_category::IssueCategory;
use crate::enums::severity::Severity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub severity: Severity,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub file: String,
    pub line: Option<u32>,
    pub message: String,
    pub suggestion: String,
    pub cve: Option<String>,
    pub category: IssueCategory,
}
