//! Figure assembly: pairing generated curves with stroke/fill styling
//!
//! Each output mode produces a list of styled paths in draw order; later
//! paths paint over earlier ones when filled regions overlap.

use crate::curves::{latitude_circle, lissajous, polar_spoke, wedge_outline};
use crate::geom::Point;
use crate::segment::Segment;

/// Diameter of the spokes traced by the diagnostic polar plot.
const POLAR_SPOKE_DIAMETER: i32 = 180;

/// Reference latitude drawn as a circle on the diagnostic polar plot.
const POLAR_REFERENCE_LATITUDE: f64 = 56.4566;

/// Stroke and fill attributes for one path. `None` means the attribute is
/// rendered as `none`; colour strings are opaque and passed through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathStyle {
    pub stroke: Option<String>,
    pub stroke_width: u32,
    pub fill: Option<String>,
}

/// An ordered point sequence ready for rendering, with its styling.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledPath {
    pub points: Vec<Point>,
    pub closed: bool,
    pub style: PathStyle,
}

/// A single closed Lissajous figure with the default neutral fill.
pub fn lissajous_figure(
    x_cycles: i32,
    y_cycles: i32,
    diameter: i32,
    phase_degrees: i32,
) -> Vec<StyledPath> {
    vec![StyledPath {
        points: lissajous(x_cycles, y_cycles, diameter, phase_degrees).collect(),
        closed: true,
        style: PathStyle {
            fill: Some("gray".to_string()),
            ..PathStyle::default()
        },
    }]
}

/// A single rosette wedge, filled with a shade of red derived from the start
/// angle: `start + 6` becomes the leading hex digit, so the -6..+6 range maps
/// to a reproducible gradient from `#000000` to `#c00000`.
pub fn wedge_figure(start_hours: i32, end_hours: i32, diameter: i32) -> Vec<StyledPath> {
    vec![StyledPath {
        points: wedge_outline(diameter, start_hours, end_hours).collect(),
        closed: true,
        style: PathStyle {
            fill: Some(wedge_fill(start_hours)),
            ..PathStyle::default()
        },
    }]
}

fn wedge_fill(start_hours: i32) -> String {
    format!("#{:x}00000", start_hours + 6)
}

/// One wedge per segment, styled from the segment, in file order.
pub fn segments_figure(segments: &[Segment], diameter: i32) -> Vec<StyledPath> {
    segments
        .iter()
        .map(|seg| StyledPath {
            points: wedge_outline(diameter, seg.start, seg.end).collect(),
            closed: true,
            style: PathStyle {
                stroke: seg.stroke.clone(),
                stroke_width: seg.line_width,
                fill: seg.fill.clone(),
            },
        })
        .collect()
}

/// The diagnostic traces: one polar spoke per hours direction -6..=6 plus the
/// reference latitude circle. Points are `(angle, radius)` pairs.
pub fn polar_figure() -> Vec<Vec<Point>> {
    let mut traces: Vec<Vec<Point>> = (-6..=6)
        .map(|hours| polar_spoke(POLAR_SPOKE_DIAMETER, hours).collect())
        .collect();
    traces.push(latitude_circle(POLAR_REFERENCE_LATITUDE).collect());
    traces
}
