//! Settlement plan intake and report generation.
//!
//! The flow for one submission:
//! - `RawFormState` holds the fields as submitted
//! - [`validate`] checks the three required fields and builds a `SettlementPlan`
//! - [`render_summary`] and [`format_report`] are pure views of the plan
//! - [`export_report`] wraps the report text as a `text/plain` download

mod form;
mod report;
mod summary;

pub use form::{
    derive_priorities, validate, RawFormState, RequiredField, ValidationError,
    MISSING_FIELDS_WARNING,
};
pub use report::{
    export_report, format_report, report_file_name, ExportError, ReportExport, REPORT_MIME,
};
pub use summary::{render_summary, PlanSummary};

use crate::models::SettlementPlan;

/// Everything produced by a successful submission.
#[derive(Debug, Clone)]
pub struct SubmittedPlan {
    pub plan: SettlementPlan,
    pub summary: PlanSummary,
    pub export: ReportExport,
}

/// Run the whole intake flow for one submission.
///
/// On failure nothing is rendered or exported.
pub fn submit(raw: &RawFormState) -> Result<SubmittedPlan, ValidationError> {
    let plan = validate(raw)?;
    let summary = render_summary(&plan);
    let export = export_report(format_report(&plan), &plan.settlement_name);
    tracing::info!(
        settlement = %plan.settlement_name,
        region = %plan.region,
        priorities = plan.priorities.len(),
        "Settlement plan submitted"
    );
    Ok(SubmittedPlan {
        plan,
        summary,
        export,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriorityTag;

    #[test]
    fn test_submit_produces_single_export() {
        let mut raw = RawFormState {
            student_name: "Jane".to_string(),
            settlement_name: "New Hope".to_string(),
            region: "Grand River Valley".to_string(),
            latitude: Some("43.0".to_string()),
            longitude: Some("-85.5".to_string()),
            ..Default::default()
        };
        raw.set_checked(PriorityTag::FertileSoil, true);
        raw.set_checked(PriorityTag::WaterAccess, true);

        let submitted = submit(&raw).unwrap();
        assert_eq!(submitted.export.file_name, "settlement_plan_New_Hope.txt");
        assert!(submitted
            .export
            .body
            .contains("PRIORITIES:\n- Water access\n- Fertile soil\n"));
        assert_eq!(submitted.summary.settlement, "New Hope");
    }

    #[test]
    fn test_submit_rejects_missing_student() {
        let raw = RawFormState {
            settlement_name: "New Hope".to_string(),
            region: "Grand River Valley".to_string(),
            ..Default::default()
        };
        assert!(submit(&raw).is_err());
    }
}
