//! Michigan Pioneer Settlement Explorer library.
//!
//! - [`content`]: slide, activity and resources page content
//! - [`map`]: the illustrative 1825 territory map
//! - [`plan`]: settlement plan validation, summary and report export
//! - [`server`]: the axum web interface
//! - [`cli`]: the `pioneer` command line

pub mod cli;
pub mod config;
pub mod content;
pub mod map;
pub mod models;
pub mod plan;
pub mod server;
pub mod utils;
