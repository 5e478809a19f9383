use codepulse::enums::activity_status::ActivityStatus;
use codepulse::services::analytics::AnalyticsService;
use codepulse::services::random::SeededRandom;
use codepulse::services::repository_catalog::RepositoryCatalog;

use crate::support::ScriptedRandom;

#[test]
fn comparison_has_one_row_per_repository() {
    let mut analytics = AnalyticsService::with_random_source(Box::new(SeededRandom::new(1)));
    let rows = analytics.repository_comparison();
    let repositories = RepositoryCatalog::all();

    assert_eq!(rows.len(), repositories.len());
    for (row, repo) in rows.iter().zip(repositories) {
        assert_eq!(row.name, repo.name);
        assert_eq!(row.quality_score, repo.quality_score);
        assert_eq!(row.last_updated, repo.last_analysis);
    }
}

#[test]
fn comparison_figures_stay_in_range() {
    let mut analytics = AnalyticsService::with_random_source(Box::new(SeededRandom::new(9)));

    for _ in 0..100 {
        for row in analytics.repository_comparison() {
            assert!((5..25).contains(&row.issues));
            assert!((75..95).contains(&row.coverage));
        }
    }
}

#[test]
fn scripted_draws_hit_the_range_edges() {
    // Two draws per row: issues first, then coverage.
    let draws = vec![0.0, 0.0, 0.5, 0.5, 0.999, 0.999];
    let mut analytics = AnalyticsService::with_random_source(Box::new(ScriptedRandom::new(draws)));

    let rows = analytics.repository_comparison();
    assert_eq!((rows[0].issues, rows[0].coverage), (5, 75));
    assert_eq!((rows[1].issues, rows[1].coverage), (15, 85));
    assert_eq!((rows[2].issues, rows[2].coverage), (24, 94));
}

#[test]
fn stat_tables_match_the_analytics_page() {
    let analytics = AnalyticsService::new();

    let overall = analytics.overall_stats();
    assert_eq!(overall.len(), 4);
    assert_eq!(overall[0].label, "Average Quality Score");

    let languages = analytics.language_stats();
    assert_eq!(languages.len(), 5);
    assert!(languages.iter().all(|lang| lang.color.starts_with('#')));

    let activity = analytics.recent_activity();
    assert_eq!(activity.len(), 4);
    assert_eq!(
        activity.iter().filter(|event| event.status == ActivityStatus::Error).count(),
        1
    );
}
