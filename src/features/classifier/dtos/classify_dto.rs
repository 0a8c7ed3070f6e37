use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::classifier::services::Suggestion;
use crate::features::reports::models::{ReportCategory, ReportPriority};

/// Request DTO for classifying a draft report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassifyRequestDto {
    /// Free-text description written by the resident
    pub description: String,
    /// Optional photo, base64-encoded (standard alphabet, padded). A
    /// `data:<mime>;base64,` prefix is accepted.
    #[serde(default)]
    pub image_base64: Option<String>,
}

impl ClassifyRequestDto {
    /// Decoded image bytes, if an image was sent
    pub fn decode_image(&self) -> Result<Option<Vec<u8>>, String> {
        let Some(encoded) = self.image_base64.as_deref() else {
            return Ok(None);
        };

        let payload = match encoded.split_once(";base64,") {
            Some((prefix, data)) if prefix.starts_with("data:") => data,
            _ => encoded,
        };

        STANDARD
            .decode(payload.trim())
            .map(Some)
            .map_err(|e| format!("image_base64 is not valid base64: {}", e))
    }
}

/// Response DTO for a classification suggestion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestionResponseDto {
    pub category: ReportCategory,
    pub priority: ReportPriority,
    pub title: String,
}

impl From<Suggestion> for SuggestionResponseDto {
    fn from(s: Suggestion) -> Self {
        Self {
            category: s.category,
            priority: s.priority,
            title: s.title,
        }
    }
}
