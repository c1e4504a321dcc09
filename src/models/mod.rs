//! Data models for the settlement explorer.

mod page;
mod plan;

pub use page::{PageKind, SlideIndex, SLIDE_COUNT};
pub use plan::{
    Coordinates, PriorityTag, Region, SettlementPlan, COORDINATE_STEP, LATITUDE_DEFAULT,
    LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_DEFAULT, LONGITUDE_MAX, LONGITUDE_MIN,
    REGION_PLACEHOLDER,
};
