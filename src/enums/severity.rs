use serde::{Deserialize, Serialize};

/// Issue severity. Variants are declared in ascending order so that
/// `Severity::Critical` compares greatest.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "minor")]
    Minor,
    #[serde(rename = "major")]
    Major,
    #[serde(rename = "critical")]
    Critical,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Critical => "critical",
        }
    }
}
