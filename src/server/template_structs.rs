//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::content::{render, COURSE_MODULE, FOOTER};
use crate::map::LegendEntry;
use crate::models::{PageKind, SlideIndex};
use crate::plan::PlanSummary;

/// Helper struct for sidebar links.
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Shared page chrome used by base.html.
pub struct Layout {
    pub site_title: String,
    pub page_title: String,
    pub nav: Vec<NavItem>,
    /// Pre-rendered HTML.
    pub course_module: String,
    /// Pre-rendered HTML, one entry per line.
    pub footer: Vec<String>,
}

impl Layout {
    pub fn new(site_title: &str, page_title: &str, active: Option<PageKind>) -> Self {
        let nav = PageKind::ALL
            .iter()
            .map(|kind| NavItem {
                label: kind.label(),
                icon: kind.icon(),
                path: kind.path(),
                active: Some(*kind) == active,
            })
            .collect();

        let course_module = COURSE_MODULE
            .lines()
            .map(render::inline_html)
            .collect::<Vec<_>>()
            .join("<br>");

        Self {
            site_title: site_title.to_string(),
            page_title: page_title.to_string(),
            nav,
            course_module,
            footer: FOOTER.iter().map(|l| render::inline_html(l)).collect(),
        }
    }
}

/// Helper struct for the slide picker.
pub struct SlideLink {
    pub number: u8,
    pub path: String,
    pub active: bool,
}

/// Path of a slide page.
pub fn slide_path(index: SlideIndex) -> String {
    format!("/slides/{}", index.get())
}

#[derive(Template)]
#[template(path = "slides.html")]
pub struct SlidesTemplate {
    pub layout: Layout,
    pub slide_number: u8,
    pub slide_count: u8,
    pub slide_title: &'static str,
    pub show_title: bool,
    pub body_html: String,
    pub slide_links: Vec<SlideLink>,
    pub has_prev: bool,
    pub prev_path: String,
    pub has_next: bool,
    pub next_path: String,
}

/// An option in the region dropdown.
pub struct RegionOption {
    pub label: &'static str,
    pub selected: bool,
}

/// A priority checkbox.
pub struct CheckboxView {
    pub key: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Slider bounds and current value.
pub struct SliderView {
    pub name: &'static str,
    pub label: &'static str,
    pub min: String,
    pub max: String,
    pub step: String,
    pub value: String,
}

/// A free-text area with its prompt.
pub struct TextAreaView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

/// A hidden input carrying a submitted value to the download form.
pub struct HiddenField {
    pub name: &'static str,
    pub value: String,
}

/// The settlement form as it should be redrawn.
pub struct FormView {
    pub student_name: String,
    pub settlement_name: String,
    pub placeholder: &'static str,
    pub placeholder_selected: bool,
    pub regions: Vec<RegionOption>,
    pub sliders: Vec<SliderView>,
    pub left_checkboxes: Vec<CheckboxView>,
    pub right_checkboxes: Vec<CheckboxView>,
    pub text_areas: Vec<TextAreaView>,
}

#[derive(Template)]
#[template(path = "activity.html")]
pub struct ActivityTemplate {
    pub layout: Layout,
    pub background_title: &'static str,
    pub background_html: String,
    pub map_svg: String,
    pub legend: Vec<LegendEntry>,
    pub form: FormView,
    pub has_error: bool,
    pub error_message: String,
    pub missing_fields: Vec<&'static str>,
    pub summary: Option<PlanSummary>,
    pub download_fields: Vec<HiddenField>,
    pub download_name: String,
    pub discussion_title: &'static str,
    pub discussion_html: String,
    pub outcome_title: &'static str,
    pub outcome_html: String,
}

/// A titled block of pre-rendered HTML.
pub struct SectionView {
    pub title: &'static str,
    pub body_html: String,
}

#[derive(Template)]
#[template(path = "resources.html")]
pub struct ResourcesTemplate {
    pub layout: Layout,
    pub sections: Vec<SectionView>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
    pub message: String,
}
