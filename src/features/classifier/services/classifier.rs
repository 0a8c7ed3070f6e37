use async_trait::async_trait;
use thiserror::Error;

use crate::features::reports::models::{ReportCategory, ReportPriority};

/// Suggested metadata for a report that has not been submitted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub category: ReportCategory,
    pub priority: ReportPriority,
    pub title: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Classification backend failed: {0}")]
    Upstream(String),

    #[error("Failed to build classification prompt: {0}")]
    Prompt(String),
}

pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Suggests category, priority and title for a free-text description.
///
/// Every implementation rejects a blank description with
/// [`ClassifierError::InvalidInput`] before doing any work.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        description: &str,
        image: Option<&[u8]>,
    ) -> ClassifierResult<Suggestion>;
}

pub(crate) fn ensure_description(description: &str) -> ClassifierResult<()> {
    if description.trim().is_empty() {
        return Err(ClassifierError::InvalidInput(
            "Description is required for classification".to_string(),
        ));
    }
    Ok(())
}

/// First five whitespace-separated words followed by "..."
pub(crate) fn title_from_description(description: &str) -> String {
    let words: Vec<&str> = description.split_whitespace().take(5).collect();
    format!("{}...", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_description() {
        assert!(ensure_description("Broken swing").is_ok());
        assert!(matches!(
            ensure_description(""),
            Err(ClassifierError::InvalidInput(_))
        ));
        assert!(matches!(
            ensure_description(" \t\n "),
            Err(ClassifierError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_title_from_description() {
        assert_eq!(
            title_from_description("The  streetlight at\tthe entrance of Elm Park"),
            "The streetlight at the entrance..."
        );
        assert_eq!(title_from_description("Graffiti"), "Graffiti...");
    }
}
