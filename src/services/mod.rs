pub mod analysis_provider;
pub mod analytics;
pub mod latency;
pub mod random;
pub mod repository_catalog;
