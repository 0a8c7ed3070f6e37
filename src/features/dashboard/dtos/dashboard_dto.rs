use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::{ReportCategory, ReportStatus};

/// Number of reports in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCount {
    pub category: ReportCategory,
    /// Human-readable category name, for chart axes
    pub label: String,
    pub count: i64,
}

/// Number of reports with one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCount {
    pub status: ReportStatus,
    pub label: String,
    pub count: i64,
}

/// Aggregate counts over the (optionally filtered) report collection.
///
/// Breakdowns follow enum declaration order and leave out empty buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub total_reports: i64,
    pub submitted_count: i64,
    pub in_progress_count: i64,
    pub resolved_count: i64,
    pub by_category: Vec<CategoryCount>,
    pub by_status: Vec<StatusCount>,
}
