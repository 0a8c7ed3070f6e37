use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of a report. Any state may move to any other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Submitted,
    InProgress,
    Resolved,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Submitted,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Submitted => "Submitted",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Submitted => write!(f, "submitted"),
            ReportStatus::InProgress => write!(f, "in_progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Kind of municipal problem being reported
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Pothole,
    StreetlightOutage,
    TrashAndRecycling,
    Graffiti,
    ParkMaintenance,
    Other,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 6] = [
        ReportCategory::Pothole,
        ReportCategory::StreetlightOutage,
        ReportCategory::TrashAndRecycling,
        ReportCategory::Graffiti,
        ReportCategory::ParkMaintenance,
        ReportCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportCategory::Pothole => "Pothole",
            ReportCategory::StreetlightOutage => "Streetlight Outage",
            ReportCategory::TrashAndRecycling => "Trash & Recycling",
            ReportCategory::Graffiti => "Graffiti",
            ReportCategory::ParkMaintenance => "Park Maintenance",
            ReportCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportCategory::Pothole => write!(f, "pothole"),
            ReportCategory::StreetlightOutage => write!(f, "streetlight_outage"),
            ReportCategory::TrashAndRecycling => write!(f, "trash_and_recycling"),
            ReportCategory::Graffiti => write!(f, "graffiti"),
            ReportCategory::ParkMaintenance => write!(f, "park_maintenance"),
            ReportCategory::Other => write!(f, "other"),
        }
    }
}

/// Urgency assigned to a report
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportPriority {
    Low,
    Medium,
    High,
}

impl ReportPriority {
    pub const ALL: [ReportPriority; 3] = [
        ReportPriority::Low,
        ReportPriority::Medium,
        ReportPriority::High,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportPriority::Low => "Low",
            ReportPriority::Medium => "Medium",
            ReportPriority::High => "High",
        }
    }
}

impl std::fmt::Display for ReportPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportPriority::Low => write!(f, "low"),
            ReportPriority::Medium => write!(f, "medium"),
            ReportPriority::High => write!(f, "high"),
        }
    }
}

/// Normalizes "Trash & Recycling", "trash-and-recycling" and
/// "trash_and_recycling" to the same key
fn normalize_key(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .replace('&', "and")
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

macro_rules! impl_from_str_by_name {
    ($ty:ty, $what:literal) => {
        impl std::str::FromStr for $ty {
            type Err = String;

            /// Accepts the wire name or the human label, case-insensitive
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = normalize_key(s);
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.to_string() == key || normalize_key(v.label()) == key)
                    .ok_or_else(|| format!("Unknown {} '{}'", $what, s))
            }
        }
    };
}

impl_from_str_by_name!(ReportStatus, "status");
impl_from_str_by_name!(ReportCategory, "category");
impl_from_str_by_name!(ReportPriority, "priority");

/// Latitude/longitude pair. No range checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A citizen-submitted civic issue.
///
/// Only the report store constructs and replaces these; callers always
/// receive owned copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub priority: ReportPriority,
    pub status: ReportStatus,
    pub location: GeoPoint,
    pub image_url: String,
    pub submitted_at: DateTime<Utc>,
    /// Present iff `status == Resolved`
    pub resolved_at: Option<DateTime<Utc>>,
    pub submitted_by: String,
}

/// Caller-supplied fields for a new report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub priority: ReportPriority,
    pub location: GeoPoint,
    pub image_url: String,
    pub submitted_by: String,
}

/// Narrows a listing; `None` matches everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub category: Option<ReportCategory>,
    pub status: Option<ReportStatus>,
}

impl ReportFilter {
    pub fn matches(&self, report: &Report) -> bool {
        self.category.is_none_or(|c| c == report.category)
            && self.status.is_none_or(|s| s == report.status)
    }
}
