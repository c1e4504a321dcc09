//! Static asset constants (CSS and JavaScript).

/// Stylesheet for the web interface.
pub const CSS: &str = include_str!("styles.css");

/// Legend toggles and slider read-outs on the activity page.
pub const MAP_JS: &str = include_str!("map.js");
