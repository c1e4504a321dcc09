//! Web server command.

use crate::cli::icons::info;
use crate::config::{parse_bind_address, Settings};

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind, &settings.host, settings.port)?;

    println!(
        "{} Starting {} at http://{}:{}",
        info(),
        settings.site_title,
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}
