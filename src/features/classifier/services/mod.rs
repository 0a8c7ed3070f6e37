mod classifier;
mod llm_classifier;
mod stub_classifier;

pub use classifier::{Classifier, ClassifierError, ClassifierResult, Suggestion};
pub use llm_classifier::LlmClassifier;
pub use stub_classifier::StubClassifier;
