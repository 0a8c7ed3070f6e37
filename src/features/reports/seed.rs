//! Demonstration reports loaded when `STORE_SEED_DEMO_DATA` is enabled.

use chrono::{DateTime, TimeZone, Utc};

use crate::features::reports::models::{
    GeoPoint, Report, ReportCategory, ReportPriority, ReportStatus,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: i64,
    title: &str,
    description: &str,
    category: ReportCategory,
    status: ReportStatus,
    priority: ReportPriority,
    (lat, lng): (f64, f64),
    image_seed: &str,
    submitted_at: DateTime<Utc>,
    resolved_at: Option<DateTime<Utc>>,
    submitted_by: &str,
) -> Report {
    Report {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category,
        priority,
        status,
        location: GeoPoint { lat, lng },
        image_url: format!("https://picsum.photos/seed/{}/600/400", image_seed),
        submitted_at,
        resolved_at,
        submitted_by: submitted_by.to_string(),
    }
}

pub fn demo_reports() -> Vec<Report> {
    vec![
        report(
            1,
            "Large Pothole on Main St",
            "A deep pothole near the crosswalk at Main St and 2nd Ave. It poses a risk to cyclists and cars.",
            ReportCategory::Pothole,
            ReportStatus::Submitted,
            ReportPriority::High,
            (34.0522, -118.2437),
            "pothole1",
            at(2023, 10, 26, 8, 0),
            None,
            "John Doe",
        ),
        report(
            2,
            "Streetlight out at Elm Park",
            "The streetlight at the entrance of Elm Park is completely out. The area is very dark at night.",
            ReportCategory::StreetlightOutage,
            ReportStatus::InProgress,
            ReportPriority::Medium,
            (34.055, -118.25),
            "light1",
            at(2023, 10, 25, 19, 30),
            None,
            "Jane Smith",
        ),
        report(
            3,
            "Overflowing trash can",
            "The public trash can at the bus stop on Ocean Blvd is overflowing with garbage.",
            ReportCategory::TrashAndRecycling,
            ReportStatus::Resolved,
            ReportPriority::Low,
            (34.049, -118.245),
            "trash1",
            at(2023, 10, 24, 12, 0),
            Some(at(2023, 10, 25, 14, 0)),
            "Alice Johnson",
        ),
        report(
            4,
            "Graffiti on library wall",
            "Spray paint graffiti on the west-facing wall of the downtown public library.",
            ReportCategory::Graffiti,
            ReportStatus::Submitted,
            ReportPriority::Medium,
            (34.058, -118.24),
            "graffiti1",
            at(2023, 10, 27, 10, 15),
            None,
            "Bob Brown",
        ),
        report(
            5,
            "Broken swing at playground",
            "One of the swings in Greenwood Park is broken and unsafe for children to use.",
            ReportCategory::ParkMaintenance,
            ReportStatus::InProgress,
            ReportPriority::High,
            (34.06, -118.26),
            "park1",
            at(2023, 10, 26, 14, 45),
            None,
            "Charlie Davis",
        ),
    ]
}
