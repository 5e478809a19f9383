use serde::{Deserialize, Serialize};

use crate::structs::issue_distribution::IssueDistribution;
use crate::structs::language_breakdown::LanguageBreakdown;
use crate::structs::quality_trend_point::QualityTrendPoint;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTrends {
    pub quality_over_time: Vec<QualityTrendPoint>,
    pub issue_distribution: Vec<IssueDistribution>,
    pub language_breakdown: Vec<LanguageBreakdown>,
}
