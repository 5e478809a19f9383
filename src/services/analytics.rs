use crate::config::constants::{
    COMPARISON_COVERAGE_MIN, COMPARISON_COVERAGE_SPAN, COMPARISON_ISSUES_MIN,
    COMPARISON_ISSUES_SPAN,
};
use crate::fixtures;
use crate::services::random::ThreadRandom;
use crate::structs::activity_event::ActivityEvent;
use crate::structs::language_stat::LanguageStat;
use crate::structs::overall_stat::OverallStat;
use crate::structs::repository_comparison::RepositoryComparison;
use crate::traits::random_source::RandomSource;

/// Derived data behind the analytics page.
pub struct AnalyticsService {
    random: Box<dyn RandomSource>,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self::with_random_source(Box::new(ThreadRandom))
    }

    pub fn with_random_source(random: Box<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// One comparison row per sample repository. Quality score and
    /// last-analysis time carry over from the repository; issue and
    /// coverage figures are drawn fresh on every call.
    pub fn repository_comparison(&mut self) -> Vec<RepositoryComparison> {
        fixtures::SAMPLE_REPOSITORIES
            .iter()
            .map(|repo| RepositoryComparison {
                name: repo.name.clone(),
                quality_score: repo.quality_score,
                issues: self.draw(COMPARISON_ISSUES_MIN, COMPARISON_ISSUES_SPAN),
                coverage: self.draw(COMPARISON_COVERAGE_MIN, COMPARISON_COVERAGE_SPAN),
                last_updated: repo.last_analysis,
            })
            .collect()
    }

    pub fn overall_stats(&self) -> &'static [OverallStat] {
        &fixtures::OVERALL_STATS
    }

    pub fn language_stats(&self) -> &'static [LanguageStat] {
        &fixtures::LANGUAGE_STATS
    }

    pub fn recent_activity(&self) -> &'static [ActivityEvent] {
        &fixtures::RECENT_ACTIVITY
    }

    fn draw(&mut self, min: u32, span: u32) -> u32 {
        min + (self.random.next_unit() * f64::from(span)).floor() as u32
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
