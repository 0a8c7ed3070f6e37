use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    CreateReportDto, ReportFilterQuery, ReportResponseDto, UpdateReportStatusDto,
};
use crate::features::reports::services::ReportStore;
use crate::shared::types::{ApiResponse, Meta};

/// List reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ReportFilterQuery),
    responses(
        (status = 200, description = "Reports sorted by submission time, newest first", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 400, description = "Unknown category or status filter")
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(store): State<Arc<ReportStore>>,
    Query(query): Query<ReportFilterQuery>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = store.list_filtered(&query.into()).await;
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(store): State<Arc<ReportStore>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = store
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Submit a new report
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report created", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(store): State<Arc<ReportStore>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = store.create(dto.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report.into()),
            Some("Report submitted successfully".to_string()),
            None,
        )),
    ))
}

/// Update report status
#[utoipa::path(
    patch,
    path = "/api/reports/{id}/status",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    State(store): State<Arc<ReportStore>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = store.update_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::routes::routes;
    use crate::features::reports::seed::demo_reports;
    use crate::shared::clock::MockClock;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server_with(store: ReportStore) -> TestServer {
        TestServer::new(routes(Arc::new(store))).unwrap()
    }

    fn empty_server() -> TestServer {
        server_with(ReportStore::new(Arc::new(MockClock::fixed())))
    }

    fn seeded_server() -> TestServer {
        server_with(ReportStore::with_reports(
            demo_reports(),
            Arc::new(MockClock::fixed()),
        ))
    }

    fn main_st_body() -> Value {
        json!({
            "title": "Pothole",
            "description": "Big hole on Main St",
            "category": "pothole",
            "priority": "high",
            "location": {"lat": 34.05, "lng": -118.24},
            "image_url": "img1",
            "submitted_by": "John"
        })
    }

    #[tokio::test]
    async fn test_create_report() {
        let server = empty_server();

        let response = server.post("/api/reports").json(&main_st_body()).await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["status"], "submitted");
        assert_eq!(body["data"]["resolved_at"], Value::Null);
        assert_eq!(body["data"]["submitted_at"], "2024-03-01T09:00:00Z");
    }

    #[tokio::test]
    async fn test_create_report_requires_description() {
        let server = empty_server();
        let mut body = main_st_body();
        body["description"] = json!("  ");

        let response = server.post("/api/reports").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn test_create_report_rejects_malformed_json() {
        let server = empty_server();

        let response = server
            .post("/api/reports")
            .json(&json!({"description": "no category"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_reports_with_filters() {
        let server = seeded_server();

        let all: Value = server.get("/api/reports").await.json();
        let ids: Vec<i64> = all["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![4, 5, 1, 2, 3]);
        assert_eq!(all["meta"]["total"], 5);

        let in_progress: Value = server
            .get("/api/reports")
            .add_query_param("status", "in_progress")
            .await
            .json();
        assert_eq!(in_progress["meta"]["total"], 2);

        let graffiti: Value = server
            .get("/api/reports")
            .add_query_param("category", "graffiti")
            .add_query_param("status", "submitted")
            .await
            .json();
        assert_eq!(graffiti["data"][0]["id"], 4);
        assert_eq!(graffiti["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_list_reports_rejects_unknown_filter() {
        let server = seeded_server();

        server
            .get("/api/reports")
            .add_query_param("category", "sinkhole")
            .expect_failure()
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_report() {
        let server = seeded_server();

        let body: Value = server.get("/api/reports/3").await.json();
        assert_eq!(body["data"]["title"], "Overflowing trash can");
        assert_eq!(body["data"]["category"], "trash_and_recycling");

        server
            .get("/api/reports/42")
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_report_status() {
        let server = empty_server();
        server.post("/api/reports").json(&main_st_body()).await;

        let response = server
            .patch("/api/reports/1/status")
            .json(&json!({"status": "resolved"}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["status"], "resolved");
        assert!(body["data"]["resolved_at"].is_string());

        let listed: Value = server.get("/api/reports").await.json();
        assert_eq!(listed["data"].as_array().unwrap().len(), 1);
        assert_eq!(listed["data"][0], body["data"]);
    }

    #[tokio::test]
    async fn test_update_unknown_report_is_404() {
        let server = seeded_server();
        let before: Value = server.get("/api/reports").await.json();

        let response = server
            .patch("/api/reports/999/status")
            .json(&json!({"status": "in_progress"}))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let after: Value = server.get("/api/reports").await.json();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_update_status_requires_json_content_type() {
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        let store = Arc::new(ReportStore::with_reports(
            demo_reports(),
            Arc::new(MockClock::fixed()),
        ));

        let response = routes(Arc::clone(&store))
            .oneshot(
                Request::patch("/api/reports/1/status")
                    .body(Body::from(r#"{"status": "resolved"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            store.get(1).await.unwrap().status,
            crate::features::reports::models::ReportStatus::Submitted
        );
    }
}
