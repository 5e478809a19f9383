use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageBreakdown {
    pub language: String,
    pub percentage: u32,
    pub lines: u32,
}
