mod report;

pub use report::{
    GeoPoint, Report, ReportCategory, ReportDraft, ReportFilter, ReportPriority, ReportStatus,
};
