use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::structs::ai_recommendation::AiRecommendation;
use crate::structs::analysis_trends::AnalysisTrends;
use crate::structs::issue_summary::IssueSummary;
use crate::structs::quality_metrics::QualityMetrics;
use crate::structs::repository::Repository;

/// The aggregate record every dashboard page renders from. Synthesized
/// on demand, stamped at creation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub repository: Repository,
    pub quality_metrics: QualityMetrics,
    pub issues: IssueSummary,
    pub recommendations: Vec<AiRecommendation>,
    pub trends: AnalysisTrends,
    pub generated_at: DateTime<Utc>,
}
