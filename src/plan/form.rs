//! Form intake and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    Coordinates, PriorityTag, Region, SettlementPlan, LATITUDE_DEFAULT, LONGITUDE_DEFAULT,
};

/// Warning shown when a required field is missing.
pub const MISSING_FIELDS_WARNING: &str =
    "Please fill in your name, settlement name, and choose a region!";

/// Field values exactly as submitted.
///
/// Checkboxes are present (usually with the value `on`) when ticked and
/// absent otherwise, which is how browsers encode them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFormState {
    pub student_name: String,
    pub settlement_name: String,
    pub region: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_access: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fertile_soil: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timber: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_routes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_settlements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_relations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_reports: Option<String>,
    pub challenges: String,
    pub resources: String,
    pub vision: String,
    pub strategy: String,
}

impl RawFormState {
    fn checkbox(&self, tag: PriorityTag) -> &Option<String> {
        match tag {
            PriorityTag::WaterAccess => &self.water_access,
            PriorityTag::FertileSoil => &self.fertile_soil,
            PriorityTag::Timber => &self.timber,
            PriorityTag::TradeRoutes => &self.trade_routes,
            PriorityTag::ExistingSettlements => &self.existing_settlements,
            PriorityTag::Defense => &self.defense,
            PriorityTag::NativeRelations => &self.native_relations,
            PriorityTag::IgnoreReports => &self.ignore_reports,
        }
    }

    fn checkbox_mut(&mut self, tag: PriorityTag) -> &mut Option<String> {
        match tag {
            PriorityTag::WaterAccess => &mut self.water_access,
            PriorityTag::FertileSoil => &mut self.fertile_soil,
            PriorityTag::Timber => &mut self.timber,
            PriorityTag::TradeRoutes => &mut self.trade_routes,
            PriorityTag::ExistingSettlements => &mut self.existing_settlements,
            PriorityTag::Defense => &mut self.defense,
            PriorityTag::NativeRelations => &mut self.native_relations,
            PriorityTag::IgnoreReports => &mut self.ignore_reports,
        }
    }

    /// Whether the checkbox for `tag` was ticked.
    pub fn is_checked(&self, tag: PriorityTag) -> bool {
        match self.checkbox(tag) {
            Some(v) => !matches!(v.trim(), "off" | "false" | "0"),
            None => false,
        }
    }

    /// Tick or clear a checkbox.
    pub fn set_checked(&mut self, tag: PriorityTag, checked: bool) {
        *self.checkbox_mut(tag) = checked.then(|| "on".to_string());
    }

    /// Tags whose checkbox is ticked, in declaration order.
    pub fn checked_tags(&self) -> Vec<PriorityTag> {
        PriorityTag::ALL
            .iter()
            .copied()
            .filter(|t| self.is_checked(*t))
            .collect()
    }

    /// Slider positions, falling back to the defaults when absent or
    /// unparseable.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(
            parse_coordinate(self.latitude.as_deref(), LATITUDE_DEFAULT),
            parse_coordinate(self.longitude.as_deref(), LONGITUDE_DEFAULT),
        )
    }
}

fn parse_coordinate(value: Option<&str>, fallback: f64) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(fallback)
}

/// A required field on the settlement form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    StudentName,
    SettlementName,
    Region,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StudentName => "your name",
            Self::SettlementName => "settlement name",
            Self::Region => "region",
        }
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in your name, settlement name, and choose a region! (missing: {})", join_labels(.fields))]
    MissingRequiredField { fields: Vec<RequiredField> },
}

impl ValidationError {
    /// Fields that failed the presence check, in form order.
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            Self::MissingRequiredField { fields } => fields,
        }
    }
}

fn join_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Keep only ticked tags, in declaration order.
///
/// `checked` may list tags in any order and with repeats; the result never
/// depends on either.
pub fn derive_priorities(checked: &[PriorityTag]) -> Vec<PriorityTag> {
    PriorityTag::ALL
        .iter()
        .copied()
        .filter(|t| checked.contains(t))
        .collect()
}

/// Check the three required fields in one pass and build the plan.
///
/// Names are required to be non-empty and are kept exactly as typed, so
/// surrounding spaces reach the report and the file name.
pub fn validate(raw: &RawFormState) -> Result<SettlementPlan, ValidationError> {
    let student_name = raw.student_name.as_str();
    let settlement_name = raw.settlement_name.as_str();
    let region = Region::from_label(&raw.region);

    let mut missing = Vec::new();
    if student_name.is_empty() {
        missing.push(RequiredField::StudentName);
    }
    if settlement_name.is_empty() {
        missing.push(RequiredField::SettlementName);
    }
    let region = match region {
        Some(r) if missing.is_empty() => r,
        Some(_) => return Err(ValidationError::MissingRequiredField { fields: missing }),
        None => {
            missing.push(RequiredField::Region);
            return Err(ValidationError::MissingRequiredField { fields: missing });
        }
    };

    Ok(SettlementPlan {
        student_name: student_name.to_string(),
        settlement_name: settlement_name.to_string(),
        region,
        coordinates: raw.coordinates(),
        priorities: derive_priorities(&raw.checked_tags()),
        challenges: raw.challenges.clone(),
        resources: raw.resources.clone(),
        vision: raw.vision.clone(),
        strategy: raw.strategy.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RawFormState {
        RawFormState {
            student_name: "Jane".to_string(),
            settlement_name: "New Hope".to_string(),
            region: "Grand River Valley".to_string(),
            latitude: Some("43.0".to_string()),
            longitude: Some("-85.5".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_success() {
        let mut raw = filled();
        raw.set_checked(PriorityTag::WaterAccess, true);
        raw.set_checked(PriorityTag::FertileSoil, true);

        let plan = validate(&raw).unwrap();
        assert_eq!(plan.student_name, "Jane");
        assert_eq!(plan.settlement_name, "New Hope");
        assert_eq!(plan.region, Region::GrandRiverValley);
        assert_eq!(plan.coordinates, Coordinates::new(43.0, -85.5));
        assert_eq!(
            plan.priorities,
            vec![PriorityTag::WaterAccess, PriorityTag::FertileSoil]
        );
    }

    #[test]
    fn test_validate_empty_student_name() {
        let mut raw = filled();
        raw.student_name = String::new();
        let err = validate(&raw).unwrap_err();
        assert_eq!(err.missing_fields(), &[RequiredField::StudentName]);
    }

    #[test]
    fn test_validate_keeps_names_untrimmed() {
        let mut raw = filled();
        raw.student_name = "   ".to_string();
        raw.settlement_name = " New Hope ".to_string();
        let plan = validate(&raw).unwrap();
        assert_eq!(plan.student_name, "   ");
        assert_eq!(plan.settlement_name, " New Hope ");
    }

    #[test]
    fn test_checked_tags_in_declaration_order() {
        let mut raw = RawFormState::default();
        raw.set_checked(PriorityTag::IgnoreReports, true);
        raw.set_checked(PriorityTag::Timber, true);
        raw.set_checked(PriorityTag::WaterAccess, true);
        assert_eq!(
            raw.checked_tags(),
            vec![
                PriorityTag::WaterAccess,
                PriorityTag::Timber,
                PriorityTag::IgnoreReports
            ]
        );
    }

    #[test]
    fn test_validate_placeholder_region() {
        let mut raw = filled();
        raw.region = crate::models::REGION_PLACEHOLDER.to_string();
        let err = validate(&raw).unwrap_err();
        assert_eq!(err.missing_fields(), &[RequiredField::Region]);
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let err = validate(&RawFormState::default()).unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &[
                RequiredField::StudentName,
                RequiredField::SettlementName,
                RequiredField::Region
            ]
        );
        let msg = err.to_string();
        assert!(msg.starts_with(MISSING_FIELDS_WARNING));
        assert!(msg.contains("your name, settlement name, region"));
    }

    #[test]
    fn test_validate_names_missing_with_valid_region() {
        let mut raw = filled();
        raw.student_name.clear();
        raw.settlement_name.clear();
        let err = validate(&raw).unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &[RequiredField::StudentName, RequiredField::SettlementName]
        );
    }

    #[test]
    fn test_derive_priorities_ignores_selection_order() {
        let checked = [
            PriorityTag::IgnoreReports,
            PriorityTag::Timber,
            PriorityTag::WaterAccess,
            PriorityTag::Timber,
        ];
        assert_eq!(
            derive_priorities(&checked),
            vec![
                PriorityTag::WaterAccess,
                PriorityTag::Timber,
                PriorityTag::IgnoreReports
            ]
        );
        assert!(derive_priorities(&[]).is_empty());
    }

    #[test]
    fn test_checkbox_values() {
        let mut raw = RawFormState::default();
        raw.defense = Some("on".to_string());
        raw.timber = Some("off".to_string());
        assert!(raw.is_checked(PriorityTag::Defense));
        assert!(!raw.is_checked(PriorityTag::Timber));
        assert!(!raw.is_checked(PriorityTag::WaterAccess));
        raw.set_checked(PriorityTag::Defense, false);
        assert!(raw.checked_tags().is_empty());
    }

    #[test]
    fn test_coordinates_fall_back_to_defaults() {
        let mut raw = filled();
        raw.latitude = Some("north".to_string());
        raw.longitude = None;
        assert_eq!(raw.coordinates(), Coordinates::default());
    }

    #[test]
    fn test_free_text_is_kept_verbatim() {
        let mut raw = filled();
        raw.vision = "  A mill town\non the river  ".to_string();
        let plan = validate(&raw).unwrap();
        assert_eq!(plan.vision, "  A mill town\non the river  ");
        assert_eq!(plan.challenges, "");
    }
}
