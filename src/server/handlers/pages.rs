//! Slides, resources and not-found pages.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Redirect, Response},
};

use super::super::template_structs::{
    slide_path, Layout, NotFoundTemplate, ResourcesTemplate, SectionView, SlideLink,
    SlidesTemplate,
};
use super::super::AppState;
use super::helpers::render_page;
use crate::content::{render, resources_page, slide, Block};
use crate::models::{PageKind, SlideIndex, SLIDE_COUNT};

/// `/` and `/slides` open the first slide.
pub async fn index() -> Redirect {
    Redirect::to(&slide_path(SlideIndex::FIRST))
}

/// Show one lecture slide.
pub async fn show_slide(State(state): State<AppState>, Path(n): Path<String>) -> Response {
    let index = match n.parse::<u8>().ok().and_then(SlideIndex::new) {
        Some(index) => index,
        None => {
            tracing::debug!("No slide numbered {:?}", n);
            return not_found_page(
                &state,
                &format!("There is no slide {}. Slides run from 1 to {}.", n, SLIDE_COUNT),
            );
        }
    };

    let current = slide(index);
    tracing::debug!("Rendering {}", index);

    let template = SlidesTemplate {
        layout: Layout::new(
            &state.settings.site_title,
            &index.to_string(),
            Some(PageKind::Slides),
        ),
        slide_number: index.get(),
        slide_count: SLIDE_COUNT,
        slide_title: current.title,
        // The title slide carries its own centered headings.
        show_title: !matches!(current.blocks.first(), Some(Block::Centered { .. })),
        body_html: render::to_html(current.blocks),
        slide_links: SlideIndex::all()
            .map(|i| SlideLink {
                number: i.get(),
                path: slide_path(i),
                active: i == index,
            })
            .collect(),
        has_prev: index.prev().is_some(),
        prev_path: index.prev().map(slide_path).unwrap_or_default(),
        has_next: index.next().is_some(),
        next_path: index.next().map(slide_path).unwrap_or_default(),
    };

    render_page(StatusCode::OK, &template)
}

/// The resources and library research page.
pub async fn resources(State(state): State<AppState>) -> Response {
    let sections = resources_page()
        .iter()
        .map(|section| SectionView {
            title: section.title,
            body_html: render::to_html(section.blocks),
        })
        .collect();

    let template = ResourcesTemplate {
        layout: Layout::new(
            &state.settings.site_title,
            PageKind::Resources.label(),
            Some(PageKind::Resources),
        ),
        sections,
    };

    render_page(StatusCode::OK, &template)
}

/// Fallback for unknown routes.
pub async fn not_found(State(state): State<AppState>) -> Response {
    not_found_page(&state, "The page you asked for does not exist.")
}

fn not_found_page(state: &AppState, message: &str) -> Response {
    let template = NotFoundTemplate {
        layout: Layout::new(&state.settings.site_title, "Not Found", None),
        message: message.to_string(),
    };
    render_page(StatusCode::NOT_FOUND, &template)
}
