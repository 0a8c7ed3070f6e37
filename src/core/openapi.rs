use utoipa::{Modify, OpenApi};

use crate::features::classifier::{dtos as classifier_dtos, handlers as classifier_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::get_report,
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::update_report_status,
        // Classifier
        classifier_handlers::classify_handler::classify,
        // Dashboard
        dashboard_handlers::dashboard_handler::get_summary,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Reports
            reports_models::ReportStatus,
            reports_models::ReportCategory,
            reports_models::ReportPriority,
            reports_models::GeoPoint,
            reports_dtos::ReportResponseDto,
            reports_dtos::CreateReportDto,
            reports_dtos::UpdateReportStatusDto,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            ApiResponse<reports_dtos::ReportResponseDto>,
            // Classifier
            classifier_dtos::ClassifyRequestDto,
            classifier_dtos::SuggestionResponseDto,
            ApiResponse<classifier_dtos::SuggestionResponseDto>,
            // Dashboard
            dashboard_dtos::CategoryCount,
            dashboard_dtos::StatusCount,
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
        )
    ),
    tags(
        (name = "reports", description = "Citizen-submitted civic issue reports"),
        (name = "classifier", description = "Category, priority and title suggestions for draft reports"),
        (name = "Dashboard", description = "Aggregate report statistics"),
    ),
    info(
        title = "Civic Reports API",
        version = "0.1.0",
        description = "API documentation for Civic Reports",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/api/reports"));
        assert!(paths.contains(&"/api/reports/{id}"));
        assert!(paths.contains(&"/api/reports/{id}/status"));
        assert!(paths.contains(&"/api/classify"));
        assert!(paths.contains(&"/api/dashboard/summary"));
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Town Hall".to_string(),
            version: "2.0.0".to_string(),
            description: "Staging".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Town Hall");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("Staging"));
    }
}
