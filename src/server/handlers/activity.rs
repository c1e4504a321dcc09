//! Settlement activity page and report download.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};

use super::super::template_structs::{
    ActivityTemplate, CheckboxView, FormView, HiddenField, Layout, RegionOption, SliderView,
    TextAreaView,
};
use super::super::AppState;
use super::helpers::render_page;
use crate::content::{activity_background, discussion_questions, historical_outcome, render};
use crate::map::{figure, legend};
use crate::models::{
    PageKind, PriorityTag, Region, SettlementPlan, COORDINATE_STEP, LATITUDE_MAX, LATITUDE_MIN,
    LONGITUDE_MAX, LONGITUDE_MIN, REGION_PLACEHOLDER,
};
use crate::plan::{self, RawFormState, ValidationError, MISSING_FIELDS_WARNING};

/// Free-text prompts: (field, label, placeholder).
const TEXT_AREAS: [(&str, &str, &str); 4] = [
    (
        "challenges",
        "What challenges do you expect?",
        "Describe the obstacles you'll face (forest clearing, swamps, isolation, etc.)",
    ),
    (
        "resources",
        "What resources are available?",
        "List the natural resources and advantages of your location",
    ),
    (
        "vision",
        "What will your settlement become in 20 years?",
        "Describe your community's future (farming hub, trading post, mill town, etc.)",
    ),
    (
        "strategy",
        "Your first year survival strategy:",
        "What are your priorities? (shelter, clearing land, crops, relationships, etc.)",
    ),
];

/// Checkboxes shown in the left column; the rest go on the right.
const LEFT_COLUMN: usize = 4;

fn text_area_value<'a>(raw: &'a RawFormState, name: &str) -> &'a str {
    match name {
        "challenges" => &raw.challenges,
        "resources" => &raw.resources,
        "vision" => &raw.vision,
        _ => &raw.strategy,
    }
}

fn form_view(raw: &RawFormState) -> FormView {
    let selected = Region::from_label(&raw.region);
    let coords = raw.coordinates();
    let checkbox = |tag: &PriorityTag| CheckboxView {
        key: tag.key(),
        label: tag.checkbox_label(),
        checked: raw.is_checked(*tag),
    };
    let (left, right) = PriorityTag::ALL.split_at(LEFT_COLUMN);

    FormView {
        student_name: raw.student_name.clone(),
        settlement_name: raw.settlement_name.clone(),
        placeholder: REGION_PLACEHOLDER,
        placeholder_selected: selected.is_none(),
        regions: Region::ALL
            .iter()
            .map(|r| RegionOption {
                label: r.label(),
                selected: Some(*r) == selected,
            })
            .collect(),
        sliders: vec![
            SliderView {
                name: "latitude",
                label: "Latitude (approximate):",
                min: format!("{:.1}", LATITUDE_MIN),
                max: format!("{:.1}", LATITUDE_MAX),
                step: format!("{:.1}", COORDINATE_STEP),
                value: coords.latitude_str(),
            },
            SliderView {
                name: "longitude",
                label: "Longitude (approximate):",
                min: format!("{:.1}", LONGITUDE_MIN),
                max: format!("{:.1}", LONGITUDE_MAX),
                step: format!("{:.1}", COORDINATE_STEP),
                value: coords.longitude_str(),
            },
        ],
        left_checkboxes: left.iter().map(checkbox).collect(),
        right_checkboxes: right.iter().map(checkbox).collect(),
        text_areas: TEXT_AREAS
            .iter()
            .map(|&(name, label, placeholder)| TextAreaView {
                name,
                label,
                placeholder,
                value: text_area_value(raw, name).to_string(),
            })
            .collect(),
    }
}

/// Hidden inputs that let the download form re-submit a validated plan.
fn download_fields(plan: &SettlementPlan) -> Vec<HiddenField> {
    let mut fields = vec![
        HiddenField {
            name: "student_name",
            value: plan.student_name.clone(),
        },
        HiddenField {
            name: "settlement_name",
            value: plan.settlement_name.clone(),
        },
        HiddenField {
            name: "region",
            value: plan.region.label().to_string(),
        },
        HiddenField {
            name: "latitude",
            value: plan.coordinates.latitude_str(),
        },
        HiddenField {
            name: "longitude",
            value: plan.coordinates.longitude_str(),
        },
    ];
    fields.extend(plan.priorities.iter().map(|tag| HiddenField {
        name: tag.key(),
        value: "on".to_string(),
    }));
    fields.extend([
        HiddenField {
            name: "challenges",
            value: plan.challenges.clone(),
        },
        HiddenField {
            name: "resources",
            value: plan.resources.clone(),
        },
        HiddenField {
            name: "vision",
            value: plan.vision.clone(),
        },
        HiddenField {
            name: "strategy",
            value: plan.strategy.clone(),
        },
    ]);
    fields
}

fn activity_template(state: &AppState, raw: &RawFormState) -> ActivityTemplate {
    let background = activity_background();
    let discussion = discussion_questions();
    let outcome = historical_outcome();

    ActivityTemplate {
        layout: Layout::new(
            &state.settings.site_title,
            PageKind::Activity.label(),
            Some(PageKind::Activity),
        ),
        background_title: background.title,
        background_html: render::to_html(background.blocks),
        map_svg: state.map_svg.to_string(),
        legend: legend(figure()),
        form: form_view(raw),
        has_error: false,
        error_message: String::new(),
        missing_fields: Vec::new(),
        summary: None,
        download_fields: Vec::new(),
        download_name: String::new(),
        discussion_title: discussion.title,
        discussion_html: render::to_html(discussion.blocks),
        outcome_title: outcome.title,
        outcome_html: render::to_html(outcome.blocks),
    }
}

/// Show the activity page with an empty form.
pub async fn show_activity(State(state): State<AppState>) -> Response {
    let template = activity_template(&state, &RawFormState::default());
    render_page(StatusCode::OK, &template)
}

/// Handle a settlement plan submission.
///
/// Success redraws the page with the summary and a download form. A missing
/// required field redraws it with the warning and the input preserved.
pub async fn submit_activity(
    State(state): State<AppState>,
    Form(raw): Form<RawFormState>,
) -> Response {
    let mut template = activity_template(&state, &raw);

    match plan::submit(&raw) {
        Ok(submitted) => {
            template.download_fields = download_fields(&submitted.plan);
            template.download_name = submitted.export.file_name;
            template.summary = Some(submitted.summary);
        }
        Err(e) => {
            tracing::warn!("Settlement plan rejected: {}", e);
            template.has_error = true;
            template.error_message = MISSING_FIELDS_WARNING.to_string();
            template.missing_fields = missing_labels(&e);
        }
    }

    render_page(StatusCode::OK, &template)
}

fn missing_labels(e: &ValidationError) -> Vec<&'static str> {
    e.missing_fields().iter().map(|f| f.label()).collect()
}

/// Download the plain-text report for a submitted plan.
pub async fn download_report(Form(raw): Form<RawFormState>) -> Response {
    match plan::submit(&raw) {
        Ok(submitted) => {
            let export = submitted.export;
            tracing::debug!("Serving report {}", export.file_name);
            (
                StatusCode::OK,
                [
                    (
                        header::CONTENT_TYPE,
                        format!("{}; charset=utf-8", export.mime_type),
                    ),
                    (header::CONTENT_DISPOSITION, export.content_disposition()),
                ],
                export.body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Report download rejected: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
    }
}
