//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod config_cmd;
mod plan;
mod serve;
mod slides;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};
use crate::models::PriorityTag;

#[derive(Parser)]
#[command(name = "pioneer")]
#[command(about = "Michigan Pioneer Settlement Explorer")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true, env = "PIONEER_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Bind address: PORT, HOST, or HOST:PORT (defaults to the configured address)
        bind: Option<String>,
    },

    /// Write a settlement plan report without the web page
    Plan(PlanArgs),

    /// Print lecture slides to the terminal
    Slides {
        /// Slide number (1-10)
        #[arg(default_value = "1")]
        number: u8,
        /// List slide titles instead of printing one slide
        #[arg(short, long)]
        list: bool,
    },

    /// Show the effective configuration
    Config,
}

/// Fields of the settlement plan form.
#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// Your name
    #[arg(long)]
    pub student: String,
    /// Settlement name
    #[arg(long)]
    pub settlement: String,
    /// Region, exactly as listed on the activity page
    #[arg(long)]
    pub region: String,
    /// Approximate latitude (41.7 to 46.0)
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,
    /// Approximate longitude (-87.0 to -82.5)
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,
    /// Priority key; repeat for several (e.g. water_access, fertile_soil)
    #[arg(long = "priority", value_parser = parse_priority)]
    pub priorities: Vec<PriorityTag>,
    /// Expected challenges
    #[arg(long, default_value = "")]
    pub challenges: String,
    /// Available resources
    #[arg(long, default_value = "")]
    pub resources: String,
    /// What the settlement becomes in 20 years
    #[arg(long, default_value = "")]
    pub vision: String,
    /// First year survival strategy
    #[arg(long, default_value = "")]
    pub strategy: String,
    /// Directory to write the report into (defaults to the configured reports_dir)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Print the report instead of writing a file
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,
}

fn parse_priority(key: &str) -> Result<PriorityTag, String> {
    PriorityTag::from_key(key).ok_or_else(|| {
        let keys: Vec<_> = PriorityTag::ALL.iter().map(|t| t.key()).collect();
        format!("unknown priority '{}' (expected one of: {})", key, keys.join(", "))
    })
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
    };
    let (settings, config) = load_settings_with_options(options).await?;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind_address());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::Plan(args) => plan::cmd_plan(&settings, args),
        Commands::Slides { number, list } => {
            if list {
                slides::cmd_slides_list();
                Ok(())
            } else {
                slides::cmd_slide(number)
            }
        }
        Commands::Config => config_cmd::cmd_config_show(&settings, &config),
    }
}
