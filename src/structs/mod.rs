pub mod activity_event;
pub mod ai_recommendation;
pub mod analysis_result;
pub mod analysis_trends;
pub mod issue;
pub mod issue_distribution;
pub mod issue_summary;
pub mod language_breakdown;
pub mod language_stat;
pub mod overall_stat;
pub mod quality_metrics;
pub mod quality_trend_point;
pub mod repository;
pub mod repository_comparison;
