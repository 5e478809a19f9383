use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the sample repositories shown on the dashboard. Fixture data,
/// never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub description: Option<String>,
    pub language: String,
    pub size: String,
    pub files_analyzed: u32,
    pub last_analysis: DateTime<Utc>,
    pub quality_score: f64,
    pub url: Option<String>,
    pub is_private: bool,
}
