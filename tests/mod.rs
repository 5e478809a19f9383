mod support;

mod analysis_provider_tests;
mod analytics_tests;
