//! Canonical demo tables. Built once on first access and read-only from
//! then on; every provider hands out clones or borrows of these.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::enums::activity_kind::ActivityKind;
use crate::enums::activity_status::ActivityStatus;
use crate::enums::issue_category::IssueCategory;
use crate::enums::priority::Priority;
use crate::enums::recommendation_category::RecommendationCategory;
use crate::enums::severity::Severity;
use crate::enums::trend_direction::TrendDirection;
use crate::structs::activity_event::ActivityEvent;
use crate::structs::ai_recommendation::AiRecommendation;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::analysis_trends::AnalysisTrends;
use crate::structs::issue::Issue;
use crate::structs::issue_distribution::IssueDistribution;
use crate::structs::issue_summary::IssueSummary;
use crate::structs::language_breakdown::LanguageBreakdown;
use crate::structs::language_stat::LanguageStat;
use crate::structs::overall_stat::OverallStat;
use crate::structs::quality_metrics::QualityMetrics;
use crate::structs::quality_trend_point::QualityTrendPoint;
use crate::structs::repository::Repository;

fn timestamp(value: &str) -> DateTime<Utc> {
    value.parse().expect("fixture timestamps are valid RFC 3339")
}

pub static SAMPLE_REPOSITORIES: Lazy<Vec<Repository>> = Lazy::new(|| {
    vec![
        Repository {
            id: "1".to_string(),
            name: "react-ecommerce-app".to_string(),
            owner: "alekhya-dev".to_string(),
            description: Some("Modern React e-commerce application with TypeScript".to_string()),
            language: "TypeScript".to_string(),
            size: "2.3MB".to_string(),
            files_analyzed: 127,
            last_analysis: timestamp("2024-12-15T10:30:00Z"),
            quality_score: 8.7,
            url: Some("https://github.com/alekhya-dev/react-ecommerce-app".to_string()),
            is_private: false,
        },
        Repository {
            id: "2".to_string(),
            name: "vue-admin-dashboard".to_string(),
            owner: "alekhya-dev".to_string(),
            description: Some("Vue.js admin dashboard with real-time analytics".to_string()),
            language: "Vue.js".to_string(),
            size: "1.8MB".to_string(),
            files_analyzed: 89,
            last_analysis: timestamp("2024-12-14T15:22:00Z"),
            quality_score: 9.1,
            url: Some("https://github.com/alekhya-dev/vue-admin-dashboard".to_string()),
            is_private: false,
        },
        Repository {
            id: "3".to_string(),
            name: "node-api-service".to_string(),
            owner: "alekhya-dev".to_string(),
            description: Some("RESTful API service built with Node.js and Express".to_string()),
            language: "JavaScript".to_string(),
            size: "1.2MB".to_string(),
            files_analyzed: 64,
            last_analysis: timestamp("2024-12-13T09:15:00Z"),
            quality_score: 8.3,
            url: Some("https://github.com/alekhya-dev/node-api-service".to_string()),
            is_private: true,
        },
    ]
});

pub static SAMPLE_ISSUES: Lazy<Vec<Issue>> = Lazy::new(|| {
    vec![
        Issue {
            id: "SEC-001".to_string(),
            severity: Severity::Major,
            issue_type: "Dependency Vulnerability".to_string(),
            file: "package.json".to_string(),
            line: None,
            message: "React version 17.0.2 has known vulnerabilities. Upgrade to 18.2.0+".to_string(),
            suggestion: "npm install react@^18.2.0 react-dom@^18.2.0".to_string(),
            cve: Some("CVE-2022-28131".to_string()),
            category: IssueCategory::Security,
        },
        Issue {
            id: "PERF-001".to_string(),
            severity: Severity::Major,
            issue_type: "Bundle Size".to_string(),
            file: "src/components/Dashboard.tsx".to_string(),
            line: Some(1),
            message: "Large bundle size (847KB) affects initial load time".to_string(),
            suggestion: "Implement lazy loading with React.lazy() and Suspense".to_string(),
            cve: None,
            category: IssueCategory::Performance,
        },
        Issue {
            id: "QUAL-001".to_string(),
            severity: Severity::Minor,
            issue_type: "Code Duplication".to_string(),
            file: "src/utils/validation.ts".to_string(),
            line: Some(15),
            message: "Duplicate validation logic found in multiple files".to_string(),
            suggestion: "Extract common validation logic to shared utility".to_string(),
            cve: None,
            category: IssueCategory::Quality,
        },
        Issue {
            id: "SEC-002".to_string(),
            severity: Severity::Minor,
            issue_type: "Input Validation".to_string(),
            file: "src/components/UserForm.tsx".to_string(),
            line: Some(45),
            message: "User input not properly sanitized before database query".to_string(),
            suggestion: "Implement input validation and parameterized queries".to_string(),
            cve: None,
            category: IssueCategory::Security,
        },
    ]
});

pub static SAMPLE_RECOMMENDATIONS: Lazy<Vec<AiRecommendation>> = Lazy::new(|| {
    vec![
        AiRecommendation {
            id: "REC-001".to_string(),
            category: RecommendationCategory::Performance,
            priority: Priority::High,
            title: "Implement Code Splitting".to_string(),
            description: "Break down large components into smaller chunks loaded on demand to improve initial load time.".to_string(),
            files: vec![
                "src/components/Dashboard.tsx".to_string(),
                "src/pages/Analytics.tsx".to_string(),
            ],
            effort: "4-6 hours".to_string(),
            impact: "40% reduction in initial bundle size".to_string(),
            implementation: Some(vec![
                "Use React.lazy() for route-level code splitting".to_string(),
                "Implement Suspense boundaries with loading states".to_string(),
                "Analyze bundle with webpack-bundle-analyzer".to_string(),
            ]),
        },
        AiRecommendation {
            id: "REC-002".to_string(),
            category: RecommendationCategory::Security,
            priority: Priority::High,
            title: "Update Dependencies".to_string(),
            description: "Several dependencies have security vulnerabilities that should be addressed immediately.".to_string(),
            files: vec!["package.json".to_string()],
            effort: "2-3 hours".to_string(),
            impact: "Eliminates 3 high-severity security vulnerabilities".to_string(),
            implementation: Some(vec![
                "Update React to latest stable version".to_string(),
                "Run npm audit fix".to_string(),
                "Review and test updated dependencies".to_string(),
            ]),
        },
        AiRecommendation {
            id: "REC-003".to_string(),
            category: RecommendationCategory::Architecture,
            priority: Priority::Medium,
            title: "Add Error Boundaries".to_string(),
            description: "Implement error boundaries to prevent cascading failures and improve user experience.".to_string(),
            files: vec![
                "src/components/Dashboard.tsx".to_string(),
                "src/App.tsx".to_string(),
            ],
            effort: "3-4 hours".to_string(),
            impact: "Improved error handling and user experience".to_string(),
            implementation: None,
        },
    ]
});

/// Precomputed analysis for the reference repository. Providers restamp
/// `generated_at` on every hand-out.
pub static BASE_ANALYSIS: Lazy<AnalysisResult> = Lazy::new(|| AnalysisResult {
    repository: SAMPLE_REPOSITORIES[0].clone(),
    quality_metrics: QualityMetrics {
        overall_score: 8.7,
        maintainability: 8.5,
        reliability: 9.0,
        security: 8.2,
        performance: 8.8,
        test_coverage: 85,
    },
    issues: IssueSummary {
        critical: 0,
        major: 2,
        minor: 8,
        info: 15,
        total: 25,
        items: SAMPLE_ISSUES.clone(),
    },
    recommendations: SAMPLE_RECOMMENDATIONS.clone(),
    trends: AnalysisTrends {
        quality_over_time: vec![
            QualityTrendPoint { month: "Jul".to_string(), score: 7.2 },
            QualityTrendPoint { month: "Aug".to_string(), score: 7.8 },
            QualityTrendPoint { month: "Sep".to_string(), score: 8.1 },
            QualityTrendPoint { month: "Oct".to_string(), score: 8.5 },
            QualityTrendPoint { month: "Nov".to_string(), score: 8.3 },
            QualityTrendPoint { month: "Dec".to_string(), score: 8.7 },
        ],
        issue_distribution: vec![
            IssueDistribution { category: "Security".to_string(), count: 3, color: "#ef4444".to_string() },
            IssueDistribution { category: "Performance".to_string(), count: 7, color: "#f59e0b".to_string() },
            IssueDistribution { category: "Quality".to_string(), count: 12, color: "#3b82f6".to_string() },
            IssueDistribution { category: "Style".to_string(), count: 5, color: "#10b981".to_string() },
        ],
        language_breakdown: vec![
            LanguageBreakdown { language: "TypeScript".to_string(), percentage: 65, lines: 8420 },
            LanguageBreakdown { language: "JavaScript".to_string(), percentage: 20, lines: 2590 },
            LanguageBreakdown { language: "CSS/SCSS".to_string(), percentage: 10, lines: 1295 },
            LanguageBreakdown { language: "HTML".to_string(), percentage: 5, lines: 648 },
        ],
    },
    generated_at: Utc::now(),
});

pub static OVERALL_STATS: Lazy<Vec<OverallStat>> = Lazy::new(|| {
    vec![
        OverallStat {
            label: "Average Quality Score".to_string(),
            value: "8.5".to_string(),
            change: "+0.3".to_string(),
            trend: TrendDirection::Up,
            description: "Across all repositories".to_string(),
        },
        OverallStat {
            label: "Total Issues Resolved".to_string(),
            value: "247".to_string(),
            change: "+12".to_string(),
            trend: TrendDirection::Up,
            description: "This month".to_string(),
        },
        OverallStat {
            label: "Security Vulnerabilities".to_string(),
            value: "8".to_string(),
            change: "-5".to_string(),
            trend: TrendDirection::Down,
            description: "High priority issues".to_string(),
        },
        OverallStat {
            label: "Code Coverage".to_string(),
            value: "87%".to_string(),
            change: "+2%".to_string(),
            trend: TrendDirection::Up,
            description: "Average across projects".to_string(),
        },
    ]
});

pub static LANGUAGE_STATS: Lazy<Vec<LanguageStat>> = Lazy::new(|| {
    vec![
        LanguageStat { language: "TypeScript".to_string(), repositories: 8, avg_quality: 8.9, color: "#3178c6".to_string() },
        LanguageStat { language: "JavaScript".to_string(), repositories: 12, avg_quality: 8.2, color: "#f7df1e".to_string() },
        LanguageStat { language: "Python".to_string(), repositories: 5, avg_quality: 8.6, color: "#3776ab".to_string() },
        LanguageStat { language: "Java".to_string(), repositories: 3, avg_quality: 8.1, color: "#ed8b00".to_string() },
        LanguageStat { language: "Go".to_string(), repositories: 2, avg_quality: 9.1, color: "#00add8".to_string() },
    ]
});

pub static RECENT_ACTIVITY: Lazy<Vec<ActivityEvent>> = Lazy::new(|| {
    vec![
        ActivityEvent {
            kind: ActivityKind::Analysis,
            repo: "react-ecommerce-app".to_string(),
            action: "Code analysis completed".to_string(),
            time: "2 hours ago".to_string(),
            status: ActivityStatus::Success,
            details: "Quality score improved from 8.4 to 8.7".to_string(),
        },
        ActivityEvent {
            kind: ActivityKind::Security,
            repo: "vue-admin-dashboard".to_string(),
            action: "Security scan completed".to_string(),
            time: "4 hours ago".to_string(),
            status: ActivityStatus::Warning,
            details: "2 medium severity vulnerabilities found".to_string(),
        },
        ActivityEvent {
            kind: ActivityKind::Performance,
            repo: "node-api-service".to_string(),
            action: "Performance analysis completed".to_string(),
            time: "6 hours ago".to_string(),
            status: ActivityStatus::Success,
            details: "Bundle size reduced by 15%".to_string(),
        },
        ActivityEvent {
            kind: ActivityKind::Analysis,
            repo: "python-ml-pipeline".to_string(),
            action: "Code analysis completed".to_string(),
            time: "8 hours ago".to_string(),
            status: ActivityStatus::Error,
            details: "Analysis failed - repository access denied".to_string(),
        },
    ]
});
