use crate::errors::{CodePulseError, CodePulseResult};
use crate::fixtures;
use crate::structs::repository::Repository;

/// Read-only view over the sample repositories.
pub struct RepositoryCatalog;

impl RepositoryCatalog {
    pub fn all() -> &'static [Repository] {
        &fixtures::SAMPLE_REPOSITORIES
    }

    pub fn by_id(id: &str) -> CodePulseResult<&'static Repository> {
        fixtures::SAMPLE_REPOSITORIES
            .iter()
            .find(|repo| repo.id == id)
            .ok_or_else(|| Self::not_found(id))
    }

    pub fn by_name(name: &str) -> CodePulseResult<&'static Repository> {
        fixtures::SAMPLE_REPOSITORIES
            .iter()
            .find(|repo| repo.name == name)
            .ok_or_else(|| Self::not_found(name))
    }

    fn not_found(requested: &str) -> CodePulseError {
        log::warn!("⚠️ Repository '{}' is not in the demo catalog", requested);
        let available = fixtures::SAMPLE_REPOSITORIES
            .iter()
            .map(|repo| repo.name.clone())
            .collect();
        CodePulseError::repository_not_found(requested, available)
    }
}
