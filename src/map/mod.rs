//! Illustrative map of Michigan Territory in 1825.
//!
//! Every shape is a literal coordinate table; nothing here is derived from
//! a geographic model. Points are `(longitude, latitude)` pairs.

mod svg;

pub use svg::{layer_id, legend, render_svg, LegendEntry, SvgOptions};

use serde::Serialize;

/// Axis ranges and plot styling.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Axes {
    pub lon_range: (f64, f64),
    pub lat_range: (f64, f64),
    pub plot_background: &'static str,
    pub paper_background: &'static str,
    pub height: u32,
}

/// Stroke style of a shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dash {
    Solid,
    Dash,
    Dot,
}

/// A filled polygon with a hover label.
#[derive(Debug, Serialize)]
pub struct Area {
    pub name: &'static str,
    pub points: &'static [(f64, f64)],
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub dash: Dash,
    /// Hover text, one entry per line.
    pub hover: &'static [&'static str],
}

/// An open polyline, used for rivers.
#[derive(Debug, Serialize)]
pub struct Line {
    pub name: &'static str,
    pub points: &'static [(f64, f64)],
    pub stroke: &'static str,
    pub stroke_width: f64,
}

/// An existing settlement shown as a star marker.
#[derive(Debug, Serialize)]
pub struct Settlement {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Marker size in pixels.
    pub size: f64,
}

/// One legend entry and what it draws.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Area(&'static Area),
    Line(&'static Line),
    Markers(&'static [Settlement]),
}

impl Layer {
    /// Legend name.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Area(a) => a.name,
            Layer::Line(l) => l.name,
            Layer::Markers(_) => "Settlements",
        }
    }
}

/// The complete figure.
#[derive(Debug, Serialize)]
pub struct MapFigure {
    pub axes: Axes,
    pub territory: Area,
    pub settlements: &'static [Settlement],
    pub rivers: &'static [Line],
    pub lake_coast: Area,
    pub swamps: &'static [Area],
}

impl MapFigure {
    /// Layers in drawing and legend order.
    pub fn layers(&'static self) -> Vec<Layer> {
        let mut layers = vec![
            Layer::Area(&self.territory),
            Layer::Markers(self.settlements),
        ];
        layers.extend(self.rivers.iter().map(Layer::Line));
        layers.push(Layer::Area(&self.lake_coast));
        layers.extend(self.swamps.iter().map(Layer::Area));
        layers
    }
}

static FIGURE: MapFigure = MapFigure {
    axes: Axes {
        lon_range: (-87.5, -82.0),
        lat_range: (41.5, 46.5),
        plot_background: "lightblue",
        paper_background: "white",
        height: 600,
    },
    territory: Area {
        name: "Michigan Territory",
        points: &[
            (-87.0, 41.7),
            (-86.0, 41.7),
            (-84.5, 41.9),
            (-83.0, 42.0),
            (-82.5, 41.7),
            (-82.3, 43.5),
            (-83.0, 45.9),
            (-84.0, 45.9),
            (-85.0, 45.5),
            (-86.0, 45.0),
            (-87.0, 43.0),
            (-87.0, 41.7),
        ],
        fill: "lightgreen",
        stroke: "darkgreen",
        stroke_width: 2.0,
        dash: Dash::Solid,
        hover: &[],
    },
    settlements: &[
        Settlement {
            name: "Detroit",
            lat: 42.33,
            lon: -83.05,
            size: 15.0,
        },
        Settlement {
            name: "Sault Ste. Marie",
            lat: 46.50,
            lon: -84.35,
            size: 10.0,
        },
        Settlement {
            name: "Fort Mackinac",
            lat: 45.85,
            lon: -84.62,
            size: 10.0,
        },
        Settlement {
            name: "Monroe",
            lat: 41.92,
            lon: -83.40,
            size: 8.0,
        },
        Settlement {
            name: "Ann Arbor (est. 1824)",
            lat: 42.28,
            lon: -83.74,
            size: 8.0,
        },
    ],
    rivers: &[
        Line {
            name: "Detroit River",
            points: &[(-83.1, 42.0), (-83.0, 42.4)],
            stroke: "blue",
            stroke_width: 3.0,
        },
        Line {
            name: "Grand River",
            points: &[(-86.2, 43.0), (-85.7, 42.9), (-85.0, 42.8), (-84.5, 42.9)],
            stroke: "blue",
            stroke_width: 3.0,
        },
        Line {
            name: "Saginaw River",
            points: &[(-84.0, 43.6), (-83.9, 43.4)],
            stroke: "blue",
            stroke_width: 3.0,
        },
    ],
    lake_coast: Area {
        name: "Lake Michigan Coast",
        points: &[
            (-87.0, 42.0),
            (-87.0, 45.0),
            (-86.5, 45.5),
            (-86.0, 45.3),
            (-85.5, 44.5),
            (-86.0, 43.5),
            (-86.5, 42.5),
            (-87.0, 42.0),
        ],
        fill: "rgba(173, 216, 230, 0.3)",
        stroke: "blue",
        stroke_width: 1.0,
        dash: Dash::Dash,
        hover: &["Lake Michigan Shoreline", "Good for: Fruit orchards, Trade"],
    },
    swamps: &[
        Area {
            name: "Saginaw Swamps",
            points: &[(-83.5, 43.0), (-83.5, 43.5), (-84.0, 43.5), (-84.0, 43.0)],
            fill: "rgba(139, 69, 19, 0.2)",
            stroke: "brown",
            stroke_width: 1.0,
            dash: Dash::Dot,
            hover: &[
                "Saginaw Swamps",
                "Surveyor Report: \"Uninhabitable\"",
                "Reality: Rich soil when drained",
            ],
        },
        Area {
            name: "Grand River Wetlands",
            points: &[(-85.5, 42.3), (-85.5, 42.8), (-86.0, 42.8), (-86.0, 42.3)],
            fill: "rgba(139, 69, 19, 0.2)",
            stroke: "brown",
            stroke_width: 1.0,
            dash: Dash::Dot,
            hover: &[
                "Grand River Wetlands",
                "Surveyor Report: \"Uninhabitable\"",
                "Reality: Rich soil when drained",
            ],
        },
    ],
};

/// The territory map.
pub fn figure() -> &'static MapFigure {
    &FIGURE
}

impl Area {
    /// Tooltip lines; areas without explicit hover text show their name.
    pub fn hover_lines(&self) -> Vec<&'static str> {
        if self.hover.is_empty() {
            vec![self.name]
        } else {
            self.hover.to_vec()
        }
    }
}

impl Settlement {
    pub fn hover_lines(&self) -> Vec<&'static str> {
        vec![self.name, "Existing settlement"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_order() {
        let names: Vec<_> = figure().layers().iter().map(|l| l.name()).collect();
        assert_eq!(
            names,
            vec![
                "Michigan Territory",
                "Settlements",
                "Detroit River",
                "Grand River",
                "Saginaw River",
                "Lake Michigan Coast",
                "Saginaw Swamps",
                "Grand River Wetlands",
            ]
        );
    }

    #[test]
    fn test_polygons_are_closed_or_implicitly_closed() {
        let f = figure();
        assert_eq!(f.territory.points.first(), f.territory.points.last());
        assert_eq!(f.lake_coast.points.first(), f.lake_coast.points.last());
        for swamp in f.swamps {
            assert_eq!(swamp.points.len(), 4);
        }
    }

    #[test]
    fn test_settlements_inside_axes() {
        let f = figure();
        for s in f.settlements {
            assert!(s.lon >= f.axes.lon_range.0 && s.lon <= f.axes.lon_range.1);
            assert!(s.lat >= f.axes.lat_range.0 && s.lat <= f.axes.lat_range.1);
        }
    }

    #[test]
    fn test_hover_text() {
        let f = figure();
        assert_eq!(f.territory.hover_lines(), vec!["Michigan Territory"]);
        assert_eq!(
            f.lake_coast.hover_lines(),
            vec!["Lake Michigan Shoreline", "Good for: Fruit orchards, Trade"]
        );
        assert_eq!(
            f.settlements[0].hover_lines(),
            vec!["Detroit", "Existing settlement"]
        );
        assert_eq!(
            f.swamps[0].hover_lines(),
            vec![
                "Saginaw Swamps",
                "Surveyor Report: \"Uninhabitable\"",
                "Reality: Rich soil when drained"
            ]
        );
    }

    #[test]
    fn test_figure_serializes() {
        let json = serde_json::to_value(figure()).unwrap();
        assert_eq!(json["settlements"].as_array().unwrap().len(), 5);
        assert_eq!(json["rivers"][1]["name"], "Grand River");
        assert_eq!(json["swamps"][0]["dash"], "dot");
    }
}
