use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::classifier::dtos::{ClassifyRequestDto, SuggestionResponseDto};
use crate::features::classifier::services::Classifier;
use crate::shared::types::ApiResponse;

/// Suggest category, priority and title for a draft report
#[utoipa::path(
    post,
    path = "/api/classify",
    request_body = ClassifyRequestDto,
    responses(
        (status = 200, description = "Suggested report metadata", body = ApiResponse<SuggestionResponseDto>),
        (status = 400, description = "Blank description or malformed image"),
        (status = 502, description = "Classification backend unavailable")
    ),
    tag = "classifier"
)]
pub async fn classify(
    State(classifier): State<Arc<dyn Classifier>>,
    AppJson(dto): AppJson<ClassifyRequestDto>,
) -> Result<Json<ApiResponse<SuggestionResponseDto>>> {
    let image = dto.decode_image().map_err(AppError::BadRequest)?;

    let suggestion = classifier
        .classify(&dto.description, image.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(suggestion.into()),
        None,
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::classifier::routes::routes;
    use crate::features::classifier::services::{
        ClassifierError, ClassifierResult, StubClassifier, Suggestion,
    };
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    struct UnreachableBackend;

    #[async_trait]
    impl Classifier for UnreachableBackend {
        async fn classify(
            &self,
            _description: &str,
            _image: Option<&[u8]>,
        ) -> ClassifierResult<Suggestion> {
            Err(ClassifierError::Upstream("connection refused".to_string()))
        }
    }

    fn server(classifier: Arc<dyn Classifier>) -> TestServer {
        TestServer::new(routes(classifier)).unwrap()
    }

    #[tokio::test]
    async fn test_classify_with_stub() {
        let server = server(Arc::new(StubClassifier::new()));

        let response = server
            .post("/api/classify")
            .json(&json!({"description": "Big hole on Main St", "image_base64": "aW1n"}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["category"], "streetlight_outage");
        assert_eq!(body["data"]["priority"], "medium");
        assert_eq!(body["data"]["title"], "Big hole on Main St...");
    }

    #[tokio::test]
    async fn test_blank_description_is_400() {
        let server = server(Arc::new(StubClassifier::new()));

        let response = server
            .post("/api/classify")
            .json(&json!({"description": "   "}))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_malformed_image_is_400() {
        let server = server(Arc::new(StubClassifier::new()));

        server
            .post("/api/classify")
            .json(&json!({"description": "Graffiti", "image_base64": "%%%"}))
            .expect_failure()
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_502() {
        let server = server(Arc::new(UnreachableBackend));

        server
            .post("/api/classify")
            .json(&json!({"description": "Graffiti"}))
            .expect_failure()
            .await
            .assert_status(StatusCode::BAD_GATEWAY);
    }
}
