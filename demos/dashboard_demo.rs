use std::time::Duration;

use codepulse::config::constants::DASHBOARD_API_DELAY_MS;
use codepulse::services::analysis_provider::AnalysisProvider;
use codepulse::services::analytics::AnalyticsService;
use codepulse::services::latency;
use codepulse::services::repository_catalog::RepositoryCatalog;

/// Walks the data flows the dashboard pages go through: the canonical
/// analysis behind the landing page, a generated one for an unknown
/// repository, and the analytics tables.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut provider = AnalysisProvider::new();

    log::info!("🔍 Fetching the canonical dashboard analysis...");
    let dashboard = latency::delayed(
        provider.fixed_analysis(),
        Duration::from_millis(DASHBOARD_API_DELAY_MS),
    )
    .await;
    log::info!(
        "✅ {} scored {}/10 with {} open issues",
        dashboard.repository.name,
        dashboard.quality_metrics.overall_score,
        dashboard.issues.total
    );

    log::info!("✨ Generating an analysis for a repository we have never seen...");
    let generated = provider.fetch_generated_analysis("python-ml-pipeline").await;
    println!("{}", serde_json::to_string_pretty(&generated)?);

    let repo = RepositoryCatalog::by_name("vue-admin-dashboard")?;
    log::info!("📋 {} was last analyzed at {}", repo.name, repo.last_analysis);

    let mut analytics = AnalyticsService::new();
    for row in analytics.repository_comparison() {
        log::info!(
            "📊 {}: {}/10, {} issues, {}% coverage",
            row.name,
            row.quality_score,
            row.issues,
            row.coverage
        );
    }

    Ok(())
}
