use std::collections::HashMap;
use std::sync::Arc;

use crate::features::dashboard::dtos::{CategoryCount, DashboardSummaryDto, StatusCount};
use crate::features::reports::models::{ReportCategory, ReportFilter, ReportStatus};
use crate::features::reports::services::ReportStore;

/// Read-only aggregate views over the report store
pub struct DashboardService {
    store: Arc<ReportStore>,
}

impl DashboardService {
    pub fn new(store: Arc<ReportStore>) -> Self {
        Self { store }
    }

    /// Totals and per-category / per-status breakdowns for reports matching
    /// `filter`
    pub async fn get_summary(&self, filter: &ReportFilter) -> DashboardSummaryDto {
        let reports = self.store.list_filtered(filter).await;

        let mut per_category: HashMap<ReportCategory, i64> = HashMap::new();
        let mut per_status: HashMap<ReportStatus, i64> = HashMap::new();
        for report in &reports {
            *per_category.entry(report.category).or_default() += 1;
            *per_status.entry(report.status).or_default() += 1;
        }

        let status_count = |status: ReportStatus| per_status.get(&status).copied().unwrap_or(0);

        let by_category = ReportCategory::ALL
            .into_iter()
            .filter_map(|category| {
                per_category.get(&category).map(|&count| CategoryCount {
                    category,
                    label: category.label().to_string(),
                    count,
                })
            })
            .collect();

        let by_status = ReportStatus::ALL
            .into_iter()
            .filter_map(|status| {
                per_status.get(&status).map(|&count| StatusCount {
                    status,
                    label: status.label().to_string(),
                    count,
                })
            })
            .collect();

        DashboardSummaryDto {
            total_reports: reports.len() as i64,
            submitted_count: status_count(ReportStatus::Submitted),
            in_progress_count: status_count(ReportStatus::InProgress),
            resolved_count: status_count(ReportStatus::Resolved),
            by_category,
            by_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::seed::demo_reports;
    use crate::shared::clock::MockClock;

    fn service(store: ReportStore) -> DashboardService {
        DashboardService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_summary_of_demo_reports() {
        let service = service(ReportStore::with_reports(
            demo_reports(),
            Arc::new(MockClock::fixed()),
        ));

        let summary = service.get_summary(&ReportFilter::default()).await;

        assert_eq!(summary.total_reports, 5);
        assert_eq!(summary.submitted_count, 2);
        assert_eq!(summary.in_progress_count, 2);
        assert_eq!(summary.resolved_count, 1);

        let categories: Vec<ReportCategory> =
            summary.by_category.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            vec![
                ReportCategory::Pothole,
                ReportCategory::StreetlightOutage,
                ReportCategory::TrashAndRecycling,
                ReportCategory::Graffiti,
                ReportCategory::ParkMaintenance,
            ]
        );
        assert!(summary.by_category.iter().all(|c| c.count == 1));
        assert_eq!(summary.by_category[2].label, "Trash & Recycling");

        let statuses: Vec<(ReportStatus, i64)> =
            summary.by_status.iter().map(|s| (s.status, s.count)).collect();
        assert_eq!(
            statuses,
            vec![
                (ReportStatus::Submitted, 2),
                (ReportStatus::InProgress, 2),
                (ReportStatus::Resolved, 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_summary_respects_filter() {
        let store = ReportStore::with_reports(demo_reports(), Arc::new(MockClock::fixed()));
        let filter = ReportFilter {
            category: None,
            status: Some(ReportStatus::InProgress),
        };
        let listed = store.list_filtered(&filter).await.len() as i64;
        let service = service(store);

        let summary = service.get_summary(&filter).await;

        assert_eq!(summary.total_reports, listed);
        assert_eq!(summary.submitted_count, 0);
        assert_eq!(summary.resolved_count, 0);
        assert_eq!(summary.by_status.len(), 1);
        assert_eq!(summary.by_status[0].label, "In Progress");
    }

    #[tokio::test]
    async fn test_summary_of_empty_store() {
        let service = service(ReportStore::new(Arc::new(MockClock::fixed())));

        let summary = service.get_summary(&ReportFilter::default()).await;

        assert_eq!(summary.total_reports, 0);
        assert!(summary.by_category.is_empty());
        assert!(summary.by_status.is_empty());
    }

    #[tokio::test]
    async fn test_summary_reflects_status_updates() {
        let store = Arc::new(ReportStore::with_reports(
            demo_reports(),
            Arc::new(MockClock::fixed()),
        ));
        let service = DashboardService::new(Arc::clone(&store));

        store.update_status(1, ReportStatus::Resolved).await.unwrap();
        let summary = service.get_summary(&ReportFilter::default()).await;

        assert_eq!(summary.submitted_count, 1);
        assert_eq!(summary.resolved_count, 2);
    }
}
