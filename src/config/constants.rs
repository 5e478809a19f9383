// Simulated network latency applied by the fetch helpers.
pub const DEFAULT_API_DELAY_MS: u64 = 1500;
pub const DASHBOARD_API_DELAY_MS: u64 = 1200;

// Baseline quality score: uniform draw from [7.0, 9.0).
pub const BASELINE_SCORE_MIN: f64 = 7.0;
pub const BASELINE_SCORE_SPAN: f64 = 2.0;

// Sub-metric noise around the baseline: uniform in [-0.25, +0.25).
pub const METRIC_JITTER: f64 = 0.25;

// Test coverage: uniform integer draw from [70, 95).
pub const COVERAGE_MIN: u32 = 70;
pub const COVERAGE_SPAN: u32 = 25;

// Issue counts: uniform integer draws from [min, min + span).
pub const CRITICAL_ISSUES_MIN: u32 = 0;
pub const CRITICAL_ISSUES_SPAN: u32 = 2;
pub const MAJOR_ISSUES_MIN: u32 = 1;
pub const MAJOR_ISSUES_SPAN: u32 = 5;
pub const MINOR_ISSUES_MIN: u32 = 5;
pub const MINOR_ISSUES_SPAN: u32 = 10;
pub const INFO_ISSUES_MIN: u32 = 10;
pub const INFO_ISSUES_SPAN: u32 = 15;

// Analytics comparison table draws.
pub const COMPARISON_ISSUES_MIN: u32 = 5;
pub const COMPARISON_ISSUES_SPAN: u32 = 20;
pub const COMPARISON_COVERAGE_MIN: u32 = 75;
pub const COMPARISON_COVERAGE_SPAN: u32 = 20;
