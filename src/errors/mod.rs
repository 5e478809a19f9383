use std::error::Error as StdError;
use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CodePulseError {
    // Catalog errors
    RepositoryNotFound {
        name: String,
        available: Vec<String>,
    },

    // Parser errors
    ParseError {
        content_type: String,
        reason: String,
    },
}

impl CodePulseError {
    pub fn repository_not_found(name: &str, available: Vec<String>) -> Self {
        Self::RepositoryNotFound {
            name: name.to_string(),
            available,
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::RepositoryNotFound { name, available } => {
                let mut msg = format!("Repository '{}' not found", name);
                if !available.is_empty() {
                    msg.push_str(&format!("\n💡 Available repositories: {}", available.join(", ")));
                }
                msg
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {}: {}\n💡 Check the format and syntax of the input", content_type, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for CodePulseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for CodePulseError {}

/// Result type alias for codepulse operations
pub type CodePulseResult<T> = Result<T, CodePulseError>;

impl From<serde_json::Error> for CodePulseError {
    fn from(error: serde_json::Error) -> Self {
        CodePulseError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}
