//! On-page summary of a submitted plan.

use serde::Serialize;

use crate::models::SettlementPlan;

/// Everything the summary panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    /// Success banner, e.g. `Settlement plan submitted for New Hope!`.
    pub banner: String,
    pub pioneer: String,
    pub settlement: String,
    pub location: String,
    pub coordinates: String,
    pub priorities: Vec<&'static str>,
}

impl PlanSummary {
    /// Plain-text rendering for the terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.banner);
        out.push_str("\n\nYour Plan Summary\n");
        out.push_str(&format!("Pioneer: {}\n", self.pioneer));
        out.push_str(&format!("Settlement: {}\n", self.settlement));
        out.push_str(&format!("Location: {}\n", self.location));
        out.push_str(&format!("Coordinates: {}\n", self.coordinates));
        out.push_str("\nKey Priorities:\n");
        for p in &self.priorities {
            out.push_str(&format!("- {}\n", p));
        }
        out
    }
}

/// Build the summary for a validated plan.
pub fn render_summary(plan: &SettlementPlan) -> PlanSummary {
    PlanSummary {
        banner: format!("Settlement plan submitted for {}!", plan.settlement_name),
        pioneer: plan.student_name.clone(),
        settlement: plan.settlement_name.clone(),
        location: plan.region.label().to_string(),
        coordinates: plan.coordinates.to_string(),
        priorities: plan.priorities.iter().map(|p| p.label()).collect(),
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
            priorities: vec![PriorityTag::WaterAccess, PriorityTag::Defense],
            challenges: String::new(),
            resources: String::new(),
            vision: String::new(),
            strategy: String::new(),
        }
    }

    #[test]
    fn test_render_summary() {
        let summary = render_summary(&plan());
        assert_eq!(summary.banner, "Settlement plan submitted for New Hope!");
        assert_eq!(summary.location, "Grand River Valley");
        assert_eq!(summary.coordinates, "43.0°N, -85.5°W");
        assert_eq!(summary.priorities, vec!["Water access", "Defense"]);
    }

    #[test]
    fn test_render_summary_is_idempotent() {
        let p = plan();
        assert_eq!(render_summary(&p), render_summary(&p));
        assert_eq!(render_summary(&p).to_text(), render_summary(&p).to_text());
    }

    #[test]
    fn test_summary_text_lists_priorities() {
        let text = render_summary(&plan()).to_text();
        assert!(text.contains("Pioneer: Jane\n"));
        assert!(text.contains("Key Priorities:\n- Water access\n- Defense\n"));
    }
}
