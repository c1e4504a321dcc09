//! Command-line interface for the settlement explorer.

mod commands;
pub mod icons;

pub use commands::{is_verbose, run};
