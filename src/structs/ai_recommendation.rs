use serde::{Deserialize, Serialize};

use crate::enums::priority::Priority;
use crate::enums::recommendation_category::RecommendationCategory;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendation {
    pub id: String,
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub files: Vec<String>,
    pub effort: String,
    pub impact: String,
    pub implementation: Option<Vec<String>>,
}
