use chrono::Utc;

use crate::config::constants::{
    BASELINE_SCORE_MIN, BASELINE_SCORE_SPAN, COVERAGE_MIN, COVERAGE_SPAN, CRITICAL_ISSUES_MIN,
    CRITICAL_ISSUES_SPAN, INFO_ISSUES_MIN, INFO_ISSUES_SPAN, MAJOR_ISSUES_MIN, MAJOR_ISSUES_SPAN,
    METRIC_JITTER, MINOR_ISSUES_MIN, MINOR_ISSUES_SPAN,
};
use crate::fixtures;
use crate::services::latency;
use crate::services::random::ThreadRandom;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::quality_metrics::QualityMetrics;
use crate::traits::random_source::RandomSource;

/// Hands out analysis records for the dashboard. The canonical record is
/// a fixture; anything else is the fixture perturbed with draws from the
/// injected random source.
pub struct AnalysisProvider {
    random: Box<dyn RandomSource>,
}

impl AnalysisProvider {
    pub fn new() -> Self {
        Self::with_random_source(Box::new(ThreadRandom))
    }

    pub fn with_random_source(random: Box<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// The canonical precomputed analysis for the reference repository,
    /// restamped with the current time. Deterministic apart from the
    /// timestamp.
    pub fn fixed_analysis(&self) -> AnalysisResult {
        let mut analysis = fixtures::BASE_ANALYSIS.clone();
        analysis.generated_at = Utc::now();
        analysis
    }

    /// Synthesize a structurally complete analysis for an arbitrary
    /// repository name. Accepts any string, including empty.
    ///
    /// Only the repository name and quality score are customized; the
    /// remaining repository fields, the issue items, the recommendations
    /// and the trend series stay the fixture's. The summary `total` is
    /// the fixture's canned value, not a recount of the fresh draws.
    pub fn generate_analysis(&mut self, repository_name: &str) -> AnalysisResult {
        let baseline = BASELINE_SCORE_MIN + self.random.next_unit() * BASELINE_SCORE_SPAN;
        let overall = round_score(baseline);

        let mut analysis = fixtures::BASE_ANALYSIS.clone();
        analysis.repository.name = repository_name.to_string();
        analysis.repository.quality_score = overall;
        analysis.quality_metrics = QualityMetrics {
            overall_score: overall,
            maintainability: self.jittered(baseline),
            reliability: self.jittered(baseline),
            security: self.jittered(baseline),
            performance: self.jittered(baseline),
            test_coverage: self.draw_count(COVERAGE_MIN, COVERAGE_SPAN),
        };
        analysis.issues.critical = self.draw_count(CRITICAL_ISSUES_MIN, CRITICAL_ISSUES_SPAN);
        analysis.issues.major = self.draw_count(MAJOR_ISSUES_MIN, MAJOR_ISSUES_SPAN);
        analysis.issues.minor = self.draw_count(MINOR_ISSUES_MIN, MINOR_ISSUES_SPAN);
        analysis.issues.info = self.draw_count(INFO_ISSUES_MIN, INFO_ISSUES_SPAN);
        analysis.generated_at = Utc::now();

        log::debug!("✨ Generated analysis for '{}' ({}/10)", repository_name, overall);
        analysis
    }

    /// `fixed_analysis` behind the simulated network delay.
    pub async fn fetch_fixed_analysis(&self) -> AnalysisResult {
        latency::simulate_api_call(self.fixed_analysis()).await
    }

    /// `generate_analysis` behind the simulated network delay.
    pub async fn fetch_generated_analysis(&mut self, repository_name: &str) -> AnalysisResult {
        latency::simulate_api_call(self.generate_analysis(repository_name)).await
    }

    fn jittered(&mut self, baseline: f64) -> f64 {
        round_score(baseline + self.random.next_unit() * (METRIC_JITTER * 2.0) - METRIC_JITTER)
    }

    fn draw_count(&mut self, min: u32, span: u32) -> u32 {
        min + (self.random.next_unit() * f64::from(span)).floor() as u32
    }
}

impl Default for AnalysisProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
