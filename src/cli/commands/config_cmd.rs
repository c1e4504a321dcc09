//! Configuration display command.

use console::style;

use crate::cli::icons::dim_arrow;
use crate::config::{Config, Settings};

/// Print the effective settings and where they came from.
pub fn cmd_config_show(settings: &Settings, config: &Config) -> anyhow::Result<()> {
    match config.source_path {
        Some(ref path) => println!("{} Config file: {}", dim_arrow(), path.display()),
        None => println!("{} No config file found, using defaults", dim_arrow()),
    }
    println!();
    println!("{}", style("Effective settings").bold());
    print!("{}", toml::to_string_pretty(settings)?);
    Ok(())
}
