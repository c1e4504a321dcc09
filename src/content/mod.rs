//! Static course content: lecture slides, activity page text and the
//! resources page.
//!
//! Content is typed data rather than markup. Inline text may use `**bold**`,
//! `*italic*` and `[label](url)`, which the renderers in [`render`] expand.

mod activity;
pub mod render;
mod resources;
mod slides;

pub use activity::{activity_background, discussion_questions, historical_outcome};
pub use resources::{resource_links, resources_page, WCCCD_LIBRARY};
pub use slides::slide;

/// Sidebar blurb naming the course module.
pub const COURSE_MODULE: &str =
    "Chapter 9: The Error of the Pioneers\n*Michigan: A History of the Wolverine State*";

/// Footer lines shown on every page.
pub const FOOTER: [&str; 2] = [
    "*Based on Chapter 9 of 'Michigan: A History of the Wolverine State' by Willis F. Dunbar and George S. May*",
    "*Wayne County Community College District | History Department*",
];

/// Style of a highlighted box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Info,
    Success,
    Warning,
}

impl CalloutKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "callout callout-info",
            Self::Success => "callout callout-success",
            Self::Warning => "callout callout-warning",
        }
    }
}

/// One tab of a tabbed panel.
#[derive(Debug)]
pub struct Tab {
    pub label: &'static str,
    pub blocks: &'static [Block],
}

/// A unit of page content.
#[derive(Debug)]
pub enum Block {
    /// Centered heading; level 1-3.
    Centered { level: u8, text: &'static str },
    /// Section heading (`h2`).
    Header(&'static str),
    /// Sub-heading (`h3`).
    Heading(&'static str),
    Text(&'static str),
    Bullets(&'static [&'static str]),
    /// Numbered items, each with optional sub-bullets.
    Outline(&'static [(&'static str, &'static [&'static str])]),
    Quote(&'static [&'static str]),
    Table {
        headers: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
    Image {
        src: &'static str,
        alt: &'static str,
        width: u32,
    },
    Callout(CalloutKind, &'static [Block]),
    Columns(&'static [&'static [Block]]),
    /// Collapsible section, closed by default.
    Expander {
        summary: &'static str,
        blocks: &'static [Block],
    },
    Tabs(&'static [Tab]),
    Rule,
}

/// A lecture slide.
#[derive(Debug)]
pub struct Slide {
    pub title: &'static str,
    pub blocks: &'static [Block],
}

/// A titled page section.
#[derive(Debug)]
pub struct Section {
    pub title: &'static str,
    pub blocks: &'static [Block],
}
