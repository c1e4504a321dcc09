//! Server-side SVG rendering of the territory map.
//!
//! Each legend layer becomes a `<g>` with a stable id so the page script can
//! toggle it. Hover text is carried in `<title>` elements.

use std::fmt::Write;

use super::{Area, Dash, Layer, Line, MapFigure, Settlement};
use crate::utils::html_escape;

/// Projection and frame settings.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Pixels per degree on both axes, which keeps the 1:1 aspect ratio.
    pub scale: f64,
    pub margin_left: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            scale: 100.0,
            margin_left: 60.0,
            margin_top: 20.0,
            margin_right: 20.0,
            margin_bottom: 50.0,
        }
    }
}

/// DOM id for a legend layer: lowercase, with runs of other characters
/// collapsed to a single `-`.
pub fn layer_id(name: &str) -> String {
    let mut id = String::from("layer-");
    let mut dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c.to_ascii_lowercase());
            dash = false;
        } else if !dash {
            id.push('-');
            dash = true;
        }
    }
    id.trim_end_matches('-').to_string()
}

/// A legend row: the layer's DOM id and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub id: String,
    pub name: &'static str,
}

/// Legend rows in layer order.
pub fn legend(figure: &'static MapFigure) -> Vec<LegendEntry> {
    figure
        .layers()
        .iter()
        .map(|layer| LegendEntry {
            id: layer_id(layer.name()),
            name: layer.name(),
        })
        .collect()
}

struct Projection<'a> {
    figure: &'a MapFigure,
    opts: &'a SvgOptions,
}

impl Projection<'_> {
    fn x(&self, lon: f64) -> f64 {
        self.opts.margin_left + (lon - self.figure.axes.lon_range.0) * self.opts.scale
    }

    fn y(&self, lat: f64) -> f64 {
        self.opts.margin_top + (self.figure.axes.lat_range.1 - lat) * self.opts.scale
    }

    fn plot_width(&self) -> f64 {
        let (lo, hi) = self.figure.axes.lon_range;
        (hi - lo) * self.opts.scale
    }

    fn plot_height(&self) -> f64 {
        let (lo, hi) = self.figure.axes.lat_range;
        (hi - lo) * self.opts.scale
    }

    fn points(&self, points: &[(f64, f64)]) -> String {
        points
            .iter()
            .map(|&(lon, lat)| format!("{:.1},{:.1}", self.x(lon), self.y(lat)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn title(lines: &[&str]) -> String {
    format!("<title>{}</title>", html_escape(&lines.join("\n")))
}

fn dash_attr(dash: Dash) -> &'static str {
    match dash {
        Dash::Solid => "",
        Dash::Dash => r#" stroke-dasharray="8,4""#,
        Dash::Dot => r#" stroke-dasharray="2,3""#,
    }
}

/// Five-pointed star centred on `(cx, cy)` whose outer diameter is `size`.
fn star_points(cx: f64, cy: f64, size: f64) -> String {
    let outer = size / 2.0;
    let inner = outer * 0.4;
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = std::f64::consts::PI / 5.0 * i as f64 - std::f64::consts::FRAC_PI_2;
            format!("{:.1},{:.1}", cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_area(out: &mut String, p: &Projection, area: &Area) {
    let _ = write!(
        out,
        r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"{}>{}</polygon>"#,
        p.points(area.points),
        area.fill,
        area.stroke,
        area.stroke_width,
        dash_attr(area.dash),
        title(&area.hover_lines()),
    );
}

fn render_line(out: &mut String, p: &Projection, line: &Line) {
    let _ = write!(
        out,
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}">{}</polyline>"#,
        p.points(line.points),
        line.stroke,
        line.stroke_width,
        title(&[line.name]),
    );
}

fn render_settlement(out: &mut String, p: &Projection, s: &Settlement) {
    let (cx, cy) = (p.x(s.lon), p.y(s.lat));
    let _ = write!(
        out,
        r#"<g class="settlement"><polygon points="{}" fill="red">{}</polygon><text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11">{}</text></g>"#,
        star_points(cx, cy, s.size),
        title(&s.hover_lines()),
        cx,
        cy - s.size / 2.0 - 4.0,
        html_escape(s.name),
    );
}

fn render_axes(out: &mut String, p: &Projection) {
    let axes = &p.figure.axes;
    let (left, top) = (p.opts.margin_left, p.opts.margin_top);
    let (right, bottom) = (left + p.plot_width(), top + p.plot_height());

    out.push_str(r##"<g class="axes" stroke="#ffffff" stroke-width="1">"##);
    let mut lon = axes.lon_range.0.ceil();
    while lon <= axes.lon_range.1 {
        let x = p.x(lon);
        let _ = write!(
            out,
            r#"<line x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{bottom:.1}"/><text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="11" stroke="none" fill="black">{lon:.0}</text>"#,
            bottom + 15.0,
        );
        lon += 1.0;
    }
    let mut lat = axes.lat_range.0.ceil();
    while lat <= axes.lat_range.1 {
        let y = p.y(lat);
        let _ = write!(
            out,
            r#"<line x1="{left:.1}" y1="{y:.1}" x2="{right:.1}" y2="{y:.1}"/><text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" stroke="none" fill="black">{lat:.0}</text>"#,
            left - 6.0,
            y + 4.0,
        );
        lat += 1.0;
    }
    out.push_str("</g>");

    let _ = write!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13">Longitude</text>"#,
        left + p.plot_width() / 2.0,
        bottom + 38.0,
    );
    let _ = write!(
        out,
        r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" font-size="13" transform="rotate(-90 {x:.1} {y:.1})">Latitude</text>"#,
        x = left - 42.0,
        y = top + p.plot_height() / 2.0,
    );
}

/// Render the full figure as a standalone `<svg>` element.
pub fn render_svg(figure: &'static MapFigure, opts: &SvgOptions) -> String {
    let p = Projection { figure, opts };
    let width = opts.margin_left + p.plot_width() + opts.margin_right;
    let height = opts.margin_top + p.plot_height() + opts.margin_bottom;

    let mut out = String::with_capacity(16 * 1024);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="territory-map" viewBox="0 0 {width:.0} {height:.0}" role="img" aria-label="Michigan Territory in 1825">"#,
    );
    let _ = write!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/><rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
        figure.axes.paper_background,
        opts.margin_left,
        opts.margin_top,
        p.plot_width(),
        p.plot_height(),
        figure.axes.plot_background,
    );
    render_axes(&mut out, &p);

    for layer in figure.layers() {
        let _ = write!(
            out,
            r#"<g id="{}" data-layer="{}">"#,
            layer_id(layer.name()),
            html_escape(layer.name()),
        );
        match layer {
            Layer::Area(area) => render_area(&mut out, &p, area),
            Layer::Line(line) => render_line(&mut out, &p, line),
            Layer::Markers(settlements) => {
                for s in settlements {
                    render_settlement(&mut out, &p, s);
                }
            }
        }
        out.push_str("</g>");
    }

    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::figure;

    #[test]
    fn test_layer_id() {
        assert_eq!(layer_id("Michigan Territory"), "layer-michigan-territory");
        assert_eq!(layer_id("Ann Arbor (est. 1824)"), "layer-ann-arbor-est-1824");
        assert_eq!(layer_id("Settlements"), "layer-settlements");
    }

    #[test]
    fn test_render_contains_every_layer() {
        let svg = render_svg(figure(), &SvgOptions::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        for layer in figure().layers() {
            assert!(svg.contains(&format!(r#"id="{}""#, layer_id(layer.name()))));
        }
        assert_eq!(svg.matches("data-layer=").count(), 8);
    }

    #[test]
    fn test_legend_matches_layers() {
        let entries = legend(figure());
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[1].name, "Settlements");
        assert_eq!(entries[1].id, "layer-settlements");
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_svg(figure(), &SvgOptions::default());
        let b = render_svg(figure(), &SvgOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_hover_titles_escaped() {
        let svg = render_svg(figure(), &SvgOptions::default());
        assert!(svg.contains("<title>Detroit\nExisting settlement</title>"));
        assert!(svg.contains("Surveyor Report: &quot;Uninhabitable&quot;"));
        assert!(svg.contains(">Longitude</text>"));
        assert!(svg.contains(">Latitude</text>"));
    }

    #[test]
    fn test_projection_corners() {
        let opts = SvgOptions::default();
        let p = Projection {
            figure: figure(),
            opts: &opts,
        };
        assert_eq!(p.x(-87.5), opts.margin_left);
        assert_eq!(p.y(46.5), opts.margin_top);
        assert!((p.plot_width() - 550.0).abs() < 1e-9);
        assert!((p.plot_height() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_star_has_ten_points() {
        assert_eq!(star_points(0.0, 0.0, 10.0).split(' ').count(), 10);
    }
}
