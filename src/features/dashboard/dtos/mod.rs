mod dashboard_dto;

pub use dashboard_dto::{CategoryCount, DashboardSummaryDto, StatusCount};
