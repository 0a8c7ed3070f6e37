use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::dashboard::services::DashboardService;
use crate::features::reports::dtos::ReportFilterQuery;
use crate::shared::types::ApiResponse;

/// Get dashboard summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    params(ReportFilterQuery),
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 400, description = "Unknown category or status filter")
    )
)]
pub async fn get_summary(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<ReportFilterQuery>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>, AppError> {
    let summary = service.get_summary(&query.into()).await;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
