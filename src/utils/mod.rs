//! Shared utility functions.
//!
//! - `html`: escaping for HTML and SVG output
//! - `text`: one-line terminal formatting helpers

mod html;
mod text;

pub use html::html_escape;
pub use text::truncate;
