use std::time::Duration;

use async_trait::async_trait;

use super::classifier::{
    ensure_description, title_from_description, Classifier, ClassifierResult, Suggestion,
};
use crate::features::reports::models::{ReportCategory, ReportPriority};

/// Offline classifier with a fixed, reproducible mapping.
///
/// With `n` the number of characters in the description, the category is
/// `ReportCategory::ALL[n % 6]` and the priority `ReportPriority::ALL[n % 3]`.
/// The image is ignored.
#[derive(Debug, Clone, Default)]
pub struct StubClassifier {
    simulated_latency: Duration,
}

impl StubClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every answer to mimic a network round trip
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }
}

#[async_trait]
impl Classifier for StubClassifier {
    async fn classify(
        &self,
        description: &str,
        _image: Option<&[u8]>,
    ) -> ClassifierResult<Suggestion> {
        ensure_description(description)?;

        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }

        let n = description.chars().count();
        let suggestion = Suggestion {
            category: ReportCategory::ALL[n % ReportCategory::ALL.len()],
            priority: ReportPriority::ALL[n % ReportPriority::ALL.len()],
            title: title_from_description(description),
        };

        tracing::debug!(
            "Stub classification: category={}, priority={}",
            suggestion.category,
            suggestion.priority
        );

        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::classifier::services::ClassifierError;

    #[tokio::test]
    async fn test_classify_is_length_based() {
        let classifier = StubClassifier::new();

        // 19 characters
        let suggestion = classifier
            .classify("Big hole on Main St", None)
            .await
            .unwrap();

        assert_eq!(suggestion.category, ReportCategory::StreetlightOutage);
        assert_eq!(suggestion.priority, ReportPriority::Medium);
        assert_eq!(suggestion.title, "Big hole on Main St...");
    }

    #[tokio::test]
    async fn test_classify_counts_characters_not_bytes() {
        let classifier = StubClassifier::new();

        // 6 characters, 7 bytes
        let suggestion = classifier.classify("café x", None).await.unwrap();

        assert_eq!(suggestion.category, ReportCategory::Pothole);
        assert_eq!(suggestion.priority, ReportPriority::Low);
    }

    #[tokio::test]
    async fn test_classify_is_deterministic() {
        let classifier = StubClassifier::new();
        let description = "Spray paint graffiti on the west-facing wall of the library";

        let first = classifier.classify(description, None).await.unwrap();
        let second = classifier
            .classify(description, Some(&[0xFF, 0xD8, 0xFF]))
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_classify_rejects_blank_description() {
        let classifier = StubClassifier::new();

        assert!(matches!(
            classifier.classify("", None).await,
            Err(ClassifierError::InvalidInput(_))
        ));
        assert!(matches!(
            classifier.classify("   ", Some(b"img")).await,
            Err(ClassifierError::InvalidInput(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let classifier = StubClassifier::new().with_simulated_latency(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        classifier.classify("Broken swing", None).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_description_fails_before_latency() {
        let classifier = StubClassifier::new().with_simulated_latency(Duration::from_secs(5));
        let started = tokio::time::Instant::now();

        tokio_test::assert_err!(classifier.classify(" ", None).await);

        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
