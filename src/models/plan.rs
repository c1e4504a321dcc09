//! Settlement plan models.
//!
//! A [`SettlementPlan`] only exists for the length of one submission: it is
//! built from validated form input, rendered, exported and dropped.

use serde::{Deserialize, Serialize};

/// Placeholder shown in the region dropdown before a choice is made.
pub const REGION_PLACEHOLDER: &str = "Select a region...";

/// Latitude slider bounds, default and step.
pub const LATITUDE_MIN: f64 = 41.7;
pub const LATITUDE_MAX: f64 = 46.0;
pub const LATITUDE_DEFAULT: f64 = 42.5;

/// Longitude slider bounds and default.
pub const LONGITUDE_MIN: f64 = -87.0;
pub const LONGITUDE_MAX: f64 = -82.5;
pub const LONGITUDE_DEFAULT: f64 = -84.5;

/// Both sliders move in steps of 0.1 degrees.
pub const COORDINATE_STEP: f64 = 0.1;

/// Region of Michigan Territory a settlement can be planned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    SoutheastMichigan,
    LakeMichiganCoast,
    GrandRiverValley,
    SaginawValley,
    NorthernLowerPeninsula,
    DetroitToAnnArbor,
    StJosephRiverValley,
}

impl Region {
    /// All regions in dropdown order.
    pub const ALL: [Region; 7] = [
        Region::SoutheastMichigan,
        Region::LakeMichiganCoast,
        Region::GrandRiverValley,
        Region::SaginawValley,
        Region::NorthernLowerPeninsula,
        Region::DetroitToAnnArbor,
        Region::StJosephRiverValley,
    ];

    /// Label shown in the dropdown and written into the report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SoutheastMichigan => "Southeast Michigan (near Detroit)",
            Self::LakeMichiganCoast => "Lake Michigan Coast (Western)",
            Self::GrandRiverValley => "Grand River Valley",
            Self::SaginawValley => "Saginaw Valley (Swamplands)",
            Self::NorthernLowerPeninsula => "Northern Lower Peninsula",
            Self::DetroitToAnnArbor => "Between Detroit and Ann Arbor",
            Self::StJosephRiverValley => "St. Joseph River Valley",
        }
    }

    /// Look up a region by its label.
    ///
    /// The placeholder and anything unrecognised map to `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.iter().copied().find(|r| r.label() == label)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A factor a student can mark as influencing their choice of site.
///
/// Declaration order is the order priorities appear in summaries and
/// reports, independent of the order boxes were ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTag {
    WaterAccess,
    FertileSoil,
    Timber,
    TradeRoutes,
    ExistingSettlements,
    Defense,
    NativeRelations,
    IgnoreReports,
}

impl PriorityTag {
    /// All tags in declaration order.
    pub const ALL: [PriorityTag; 8] = [
        PriorityTag::WaterAccess,
        PriorityTag::FertileSoil,
        PriorityTag::Timber,
        PriorityTag::TradeRoutes,
        PriorityTag::ExistingSettlements,
        PriorityTag::Defense,
        PriorityTag::NativeRelations,
        PriorityTag::IgnoreReports,
    ];

    /// Form field name of the checkbox.
    pub fn key(&self) -> &'static str {
        match self {
            Self::WaterAccess => "water_access",
            Self::FertileSoil => "fertile_soil",
            Self::Timber => "timber",
            Self::TradeRoutes => "trade_routes",
            Self::ExistingSettlements => "existing_settlements",
            Self::Defense => "defense",
            Self::NativeRelations => "native_relations",
            Self::IgnoreReports => "ignore_reports",
        }
    }

    /// Checkbox label on the form.
    pub fn checkbox_label(&self) -> &'static str {
        match self {
            Self::WaterAccess => "Water access (river/lake)",
            Self::FertileSoil => "Potential fertile soil",
            Self::Timber => "Abundant timber",
            Self::TradeRoutes => "Near trade routes",
            Self::ExistingSettlements => "Near existing settlements",
            Self::Defense => "Defensible location",
            Self::NativeRelations => "Good Native American relations",
            Self::IgnoreReports => "Ignoring negative reports",
        }
    }

    /// Short name used in the summary and report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::WaterAccess => "Water access",
            Self::FertileSoil => "Fertile soil",
            Self::Timber => "Timber",
            Self::TradeRoutes => "Trade routes",
            Self::ExistingSettlements => "Near settlements",
            Self::Defense => "Defense",
            Self::NativeRelations => "Native relations",
            Self::IgnoreReports => "Ignoring negative reports",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

impl std::fmt::Display for PriorityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Approximate site of a settlement, as picked on the two sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build coordinates, clamping into the slider ranges and snapping to
    /// the slider step.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: snap(latitude, LATITUDE_MIN, LATITUDE_MAX, LATITUDE_DEFAULT),
            longitude: snap(longitude, LONGITUDE_MIN, LONGITUDE_MAX, LONGITUDE_DEFAULT),
        }
    }

    /// Latitude with one decimal place, e.g. `43.0`.
    pub fn latitude_str(&self) -> String {
        format!("{:.1}", self.latitude)
    }

    /// Longitude with one decimal place, e.g. `-85.5`.
    pub fn longitude_str(&self) -> String {
        format!("{:.1}", self.longitude)
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self {
            latitude: LATITUDE_DEFAULT,
            longitude: LONGITUDE_DEFAULT,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°N, {}°W", self.latitude_str(), self.longitude_str())
    }
}

fn snap(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        return fallback;
    }
    let clamped = value.clamp(min, max);
    let steps = (clamped / COORDINATE_STEP).round();
    // Re-round through one decimal so 43.000000001 and friends print cleanly.
    ((steps * COORDINATE_STEP) * 10.0).round() / 10.0
}

/// A validated settlement plan.
///
/// Immutable once built; every view of the plan (summary, report, export)
/// is a pure function of this value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementPlan {
    pub student_name: String,
    pub settlement_name: String,
    pub region: Region,
    pub coordinates: Coordinates,
    /// Checked priorities in declaration order.
    pub priorities: Vec<PriorityTag>,
    pub challenges: String,
    pub resources: String,
    pub vision: String,
    pub strategy: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_labels_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_label(region.label()), Some(region));
        }
    }

    #[test]
    fn test_region_placeholder_is_not_a_region() {
        assert_eq!(Region::from_label(REGION_PLACEHOLDER), None);
        assert_eq!(Region::from_label(""), None);
        assert_eq!(Region::from_label("Upper Peninsula"), None);
    }

    #[test]
    fn test_priority_order_is_declaration_order() {
        let mut sorted = PriorityTag::ALL.to_vec();
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, PriorityTag::ALL.to_vec());
        assert_eq!(PriorityTag::ALL[0].label(), "Water access");
        assert_eq!(PriorityTag::ALL[7].label(), "Ignoring negative reports");
    }

    #[test]
    fn test_priority_from_key() {
        assert_eq!(
            PriorityTag::from_key("existing_settlements"),
            Some(PriorityTag::ExistingSettlements)
        );
        assert_eq!(PriorityTag::from_key("gold"), None);
    }

    #[test]
    fn test_coordinates_clamp_and_snap() {
        let c = Coordinates::new(50.0, -90.0);
        assert_eq!(c.latitude, LATITUDE_MAX);
        assert_eq!(c.longitude, LONGITUDE_MIN);

        let c = Coordinates::new(43.04, -85.46);
        assert_eq!(c.latitude_str(), "43.0");
        assert_eq!(c.longitude_str(), "-85.5");
    }

    #[test]
    fn test_coordinates_non_finite_fall_back() {
        let c = Coordinates::new(f64::NAN, f64::INFINITY);
        assert_eq!(c, Coordinates::default());
    }

    #[test]
    fn test_coordinates_display() {
        let c = Coordinates::new(43.0, -85.5);
        assert_eq!(c.to_string(), "43.0°N, -85.5°W");
    }
}
