use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::classifier::{
    ensure_description, title_from_description, Classifier, ClassifierError, ClassifierResult,
    Suggestion,
};
use crate::core::config::LlmConfig;
use crate::features::reports::models::{ReportCategory, ReportPriority};
use crate::shared::llm::{parse_with_fallback, LlmResponse};
use crate::shared::prompts::render_classifier_prompt;

pub const FALLBACK_TITLE: &str = "AI Analysis Failed - Manual Review Needed";

fn default_true() -> bool {
    true
}

/// Answer the model is asked to produce
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LlmClassification {
    /// One of the allowed category names
    pub category: String,
    /// One of the allowed priority names
    pub priority: String,
    /// Concise title for the report
    #[serde(default)]
    pub title: String,

    #[serde(default = "default_true")]
    #[schemars(skip)]
    pub is_llm_success: bool,
    #[serde(default)]
    #[schemars(skip)]
    pub llm_error_message: Option<String>,
}

impl Default for LlmClassification {
    fn default() -> Self {
        Self {
            category: ReportCategory::Other.to_string(),
            priority: ReportPriority::Medium.to_string(),
            title: FALLBACK_TITLE.to_string(),
            is_llm_success: true,
            llm_error_message: None,
        }
    }
}

impl LlmResponse for LlmClassification {
    fn mark_as_fallback(&mut self, error_message: String) {
        self.is_llm_success = false;
        self.llm_error_message = Some(error_message);
    }

    fn is_success(&self) -> bool {
        self.is_llm_success
    }
}

impl LlmClassification {
    /// Map the raw answer onto the report enums. Unknown categories become
    /// `Other`, unknown priorities `Medium`, a missing title is derived from
    /// the description.
    pub fn into_suggestion(self, description: &str) -> Suggestion {
        if !self.is_success() {
            return Suggestion {
                category: ReportCategory::Other,
                priority: ReportPriority::Medium,
                title: FALLBACK_TITLE.to_string(),
            };
        }

        let category = self.category.parse::<ReportCategory>().unwrap_or_else(|e| {
            tracing::warn!("{}; falling back to 'other'", e);
            ReportCategory::Other
        });
        let priority = self.priority.parse::<ReportPriority>().unwrap_or_else(|e| {
            tracing::warn!("{}; falling back to 'medium'", e);
            ReportPriority::Medium
        });

        let title = self.title.trim();
        let title = if title.is_empty() {
            title_from_description(description)
        } else {
            title.to_string()
        };

        Suggestion {
            category,
            priority,
            title,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "image/jpeg",
    }
}

fn image_data_url(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", image_mime(bytes), STANDARD.encode(bytes))
}

/// Classifier backed by an OpenAI-compatible chat completion endpoint
pub struct LlmClassifier {
    config: LlmConfig,
    http_client: reqwest::Client,
}

impl LlmClassifier {
    pub fn new(config: LlmConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn build_prompt(&self, description: &str, has_image: bool) -> ClassifierResult<String> {
        let categories: Vec<String> = ReportCategory::ALL.iter().map(|c| c.to_string()).collect();
        let priorities: Vec<String> = ReportPriority::ALL.iter().map(|p| p.to_string()).collect();
        let categories: Vec<&str> = categories.iter().map(String::as_str).collect();
        let priorities: Vec<&str> = priorities.iter().map(String::as_str).collect();

        render_classifier_prompt(
            description,
            &categories,
            &priorities,
            &LlmClassification::json_schema_string(),
            has_image,
        )
        .map_err(|e| ClassifierError::Prompt(e.to_string()))
    }

    async fn complete(&self, prompt: String, image: Option<&[u8]>) -> ClassifierResult<String> {
        let mut content = vec![ContentPart::Text { text: prompt }];
        if let Some(bytes) = image {
            content.push(ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image_data_url(bytes),
                },
            });
        }

        let request_body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
            temperature: 0.0,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let url = format!("{}/chat/completions", self.config.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach classification backend: {}", e);
                ClassifierError::Upstream(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Classification backend error: HTTP {} - {}", status, body);
            return Err(ClassifierError::Upstream(format!("HTTP {}", status)));
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| {
                tracing::error!("Failed to decode classification response: {}", e);
                ClassifierError::Upstream(format!("Invalid response body: {}", e))
            })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| ClassifierError::Upstream("Response contained no choices".to_string()))
    }
}

#[async_trait]
impl Classifier for LlmClassifier {
    async fn classify(
        &self,
        description: &str,
        image: Option<&[u8]>,
    ) -> ClassifierResult<Suggestion> {
        ensure_description(description)?;

        let prompt = self.build_prompt(description, image.is_some())?;
        let content = self.complete(prompt, image).await?;

        let classification: LlmClassification = parse_with_fallback(&content);
        if !classification.is_success() {
            tracing::warn!(
                "Unusable classification answer: {}",
                classification
                    .llm_error_message
                    .as_deref()
                    .unwrap_or("unknown error")
            );
        }

        Ok(classification.into_suggestion(description))
    }
}
