use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStat {
    pub language: String,
    pub repositories: u32,
    pub avg_quality: f64,
    pub color: String,
}
