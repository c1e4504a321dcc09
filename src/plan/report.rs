//! Plain-text report and its download artifact.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::SettlementPlan;

/// MIME type of the exported report.
pub const REPORT_MIME: &str = "text/plain";

/// Errors writing a report to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Settlement name cannot be used as a file name: {0}")]
    UnsafeFileName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Format the fixed-template report for a plan.
///
/// Pure: the same plan always yields the same bytes.
pub fn format_report(plan: &SettlementPlan) -> String {
    let priorities = plan
        .priorities
        .iter()
        .map(|p| format!("- {}", p.label()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "MICHIGAN PIONEER SETTLEMENT PLAN
================================

Student: {student}
Settlement Name: {settlement}
Region: {region}
Location: {latitude}°N, {longitude}°W

PRIORITIES:
{priorities}

EXPECTED CHALLENGES:
{challenges}

AVAILABLE RESOURCES:
{resources}

20-YEAR VISION:
{vision}

FIRST YEAR STRATEGY:
{strategy}
",
        student = plan.student_name,
        settlement = plan.settlement_name,
        region = plan.region.label(),
        latitude = plan.coordinates.latitude_str(),
        longitude = plan.coordinates.longitude_str(),
        priorities = priorities,
        challenges = plan.challenges,
        resources = plan.resources,
        vision = plan.vision,
        strategy = plan.strategy,
    )
}

/// File name offered for download: spaces become underscores.
pub fn report_file_name(settlement_name: &str) -> String {
    format!("settlement_plan_{}.txt", settlement_name.replace(' ', "_"))
}

/// A report ready to be offered as a download or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportExport {
    pub file_name: String,
    pub mime_type: &'static str,
    pub body: String,
}

impl ReportExport {
    /// `Content-Disposition` header value for the download.
    ///
    /// Header values must be visible ASCII, so non-ASCII names get an ASCII
    /// fallback plus an RFC 5987 `filename*` parameter.
    pub fn content_disposition(&self) -> String {
        let fallback: String = self
            .file_name
            .chars()
            .map(|c| {
                if c.is_ascii_graphic() && c != '"' && c != '\\' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if fallback == self.file_name {
            format!("attachment; filename=\"{}\"", fallback)
        } else {
            format!(
                "attachment; filename=\"{}\"; filename*=UTF-8''{}",
                fallback,
                urlencoding::encode(&self.file_name)
            )
        }
    }

    /// Write the report into `dir`, returning the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let name = &self.file_name;
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(ExportError::UnsafeFileName(name.clone()));
        }
        std::fs::create_dir_all(dir)?;
        let path = dir.join(name);
        std::fs::write(&path, self.body.as_bytes())?;
        Ok(path)
    }
}

/// Wrap formatted report text as a downloadable artifact.
pub fn export_report(text: String, settlement_name: &str) -> ReportExport {
    ReportExport {
        file_name: report_file_name(settlement_name),
        mime_type: REPORT_MIME,
        body: text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, PriorityTag, Region};

    fn plan() -> SettlementPlan {
        SettlementPlan {
            student_name: "Jane".to_string(),
            settlement_name: "New Hope".to_string(),
            region: Region::GrandRiverValley,
            coordinates: Coordinates::new(43.0, -85.5),
            priorities: vec![PriorityTag::WaterAccess, PriorityTag::FertileSoil],
            challenges: "Clearing old-growth forest".to_string(),
            resources: "River, timber".to_string(),
            vision: "A mill town".to_string(),
            strategy: "Shelter first".to_string(),
        }
    }

    #[test]
    fn test_format_report_full_text() {
        let expected = "MICHIGAN PIONEER SETTLEMENT PLAN
================================

Student: Jane
Settlement Name: New Hope
Region: Grand River Valley
Location: 43.0°N, -85.5°W

PRIORITIES:
- Water access
- Fertile soil

EXPECTED CHALLENGES:
Clearing old-growth forest

AVAILABLE RESOURCES:
River, timber

20-YEAR VISION:
A mill town

FIRST YEAR STRATEGY:
Shelter first
";
        assert_eq!(format_report(&plan()), expected);
    }

    #[test]
    fn test_format_report_without_priorities() {
        let mut p = plan();
        p.priorities.clear();
        let report = format_report(&p);
        assert!(report.contains("PRIORITIES:\n\nEXPECTED CHALLENGES:"));
    }

    #[test]
    fn test_format_report_is_deterministic() {
        let p = plan();
        assert_eq!(format_report(&p).as_bytes(), format_report(&p).as_bytes());
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name("New Hope"), "settlement_plan_New_Hope.txt");
        assert_eq!(
            report_file_name("Fort  St Clair"),
            "settlement_plan_Fort__St_Clair.txt"
        );
        assert_eq!(report_file_name("Detroit"), "settlement_plan_Detroit.txt");
    }

    #[test]
    fn test_export_report() {
        let export = export_report(format_report(&plan()), "New Hope");
        assert_eq!(export.file_name, "settlement_plan_New_Hope.txt");
        assert_eq!(export.mime_type, "text/plain");
        assert!(export.body.starts_with("MICHIGAN PIONEER SETTLEMENT PLAN\n"));
    }

    #[test]
    fn test_content_disposition_ascii() {
        let export = export_report(String::new(), "New Hope");
        assert_eq!(
            export.content_disposition(),
            "attachment; filename=\"settlement_plan_New_Hope.txt\""
        );
    }

    #[test]
    fn test_content_disposition_non_ascii() {
        let export = export_report(String::new(), "Île Royale");
        let header = export.content_disposition();
        assert!(header.starts_with("attachment; filename=\"settlement_plan__le_Royale.txt\""));
        assert!(header.contains("filename*=UTF-8''settlement_plan_%C3%8Ele_Royale.txt"));
    }

    #[test]
    fn test_write_rejects_path_separators() {
        let export = export_report(String::new(), "../etc");
        let dir = std::env::temp_dir();
        assert!(matches!(
            export.write_to(&dir),
            Err(ExportError::UnsafeFileName(_))
        ));
    }
}
