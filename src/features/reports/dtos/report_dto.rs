use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::reports::models::{
    GeoPoint, Report, ReportCategory, ReportDraft, ReportFilter, ReportPriority, ReportStatus,
};
use crate::shared::validation::NOT_BLANK_REGEX;

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub priority: ReportPriority,
    pub status: ReportStatus,
    pub location: GeoPoint,
    pub image_url: String,
    pub submitted_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub submitted_by: String,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            category: r.category,
            priority: r.priority,
            status: r.status,
            location: r.location,
            image_url: r.image_url,
            submitted_at: r.submitted_at,
            resolved_at: r.resolved_at,
            submitted_by: r.submitted_by,
        }
    }
}

/// Request DTO for submitting a report
///
/// Description and image are required by the submission form; the store
/// itself accepts any text.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    #[serde(default)]
    pub title: String,

    #[validate(regex(path = *NOT_BLANK_REGEX, message = "Description is required"))]
    pub description: String,

    pub category: ReportCategory,

    pub priority: ReportPriority,

    pub location: GeoPoint,

    #[validate(regex(path = *NOT_BLANK_REGEX, message = "Image is required"))]
    pub image_url: String,

    #[serde(default)]
    pub submitted_by: String,
}

impl From<CreateReportDto> for ReportDraft {
    fn from(dto: CreateReportDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            category: dto.category,
            priority: dto.priority,
            location: dto.location,
            image_url: dto.image_url,
            submitted_by: dto.submitted_by,
        }
    }
}

/// Request DTO for updating report status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

/// Optional category/status filters shared by list and dashboard endpoints
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReportFilterQuery {
    /// Only reports in this category
    pub category: Option<ReportCategory>,
    /// Only reports with this status
    pub status: Option<ReportStatus>,
}

impl From<ReportFilterQuery> for ReportFilter {
    fn from(q: ReportFilterQuery) -> Self {
        Self {
            category: q.category,
            status: q.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(description: &str, image_url: &str) -> CreateReportDto {
        CreateReportDto {
            title: "Overflowing bin".to_string(),
            description: description.to_string(),
            category: ReportCategory::TrashAndRecycling,
            priority: ReportPriority::Low,
            location: GeoPoint {
                lat: 34.049,
                lng: -118.245,
            },
            image_url: image_url.to_string(),
            submitted_by: "Alice".to_string(),
        }
    }

    #[test]
    fn test_create_dto_requires_description_and_image() {
        assert!(dto("Bin at the bus stop", "img").validate().is_ok());
        assert!(dto("   ", "img").validate().is_err());
        assert!(dto("Bin at the bus stop", "").validate().is_err());
    }

    #[test]
    fn test_create_dto_deserializes_wire_names() {
        let json = r#"{
            "description": "Tagging on the underpass",
            "category": "graffiti",
            "priority": "high",
            "location": {"lat": 1.5, "lng": -2.5},
            "image_url": "img"
        }"#;

        let parsed: CreateReportDto = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.category, ReportCategory::Graffiti);
        assert_eq!(parsed.priority, ReportPriority::High);
        assert!(parsed.title.is_empty());

        let draft = ReportDraft::from(parsed);
        assert_eq!(draft.location, GeoPoint { lat: 1.5, lng: -2.5 });
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{
            "description": "x",
            "category": "sinkhole",
            "priority": "high",
            "location": {"lat": 0, "lng": 0},
            "image_url": "img"
        }"#;
        assert!(serde_json::from_str::<CreateReportDto>(json).is_err());
    }
}
