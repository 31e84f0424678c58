//! Rosette - Lissajous figures and Foucault-pendulum rosettes
//!
//! This library generates closed 2-D parametric curves and renders them as
//! SVG documents or as a rasterized polar plot.
//!
//! # Example
//!
//! ```rust
//! use rosette::lissajous_svg;
//!
//! let svg = lissajous_svg(3, 4, 100, 0);
//! assert!(svg.contains("<svg"));
//! ```

pub mod curves;
pub mod error;
pub mod figure;
pub mod geom;
pub mod render;
pub mod segment;

pub use error::Error;
pub use figure::{PathStyle, StyledPath};
pub use geom::{BoundingBox, Point};
pub use render::SvgConfig;
pub use segment::{parse_segments, Segment};

use image::RgbImage;

/// Side length of the diagnostic polar plot, in pixels.
const POLAR_PLOT_SIZE: u32 = 1080;

fn svg_config(diameter: i32) -> SvgConfig {
    SvgConfig::new().with_document_size(f64::from(diameter))
}

/// Render a single Lissajous figure as an SVG document. The diameter sets
/// the physical document size in millimetres; the viewBox hugs the figure
/// with the default padding.
pub fn lissajous_svg(x_cycles: i32, y_cycles: i32, diameter: i32, phase_degrees: i32) -> String {
    render::render_svg(
        &figure::lissajous_figure(x_cycles, y_cycles, diameter, phase_degrees),
        &svg_config(diameter),
    )
}

/// Render a single rosette wedge as an SVG document, filled with the shade
/// of red derived from the start angle.
pub fn wedge_svg(start_hours: i32, end_hours: i32, diameter: i32) -> String {
    render::render_svg(
        &figure::wedge_figure(start_hours, end_hours, diameter),
        &svg_config(diameter),
    )
}

/// Render a full segmented rosette from segment-description text. Segments
/// draw in file order; a malformed line silently ends the scan, so only the
/// segments before it appear in the output.
pub fn segments_svg(source: &str, diameter: i32) -> String {
    let segments = parse_segments(source);
    render::render_svg(
        &figure::segments_figure(&segments, diameter),
        &svg_config(diameter),
    )
}

/// Produce the diagnostic polar plot: thirteen pendulum spokes plus the
/// reference latitude circle, rasterized to a square bitmap.
pub fn polar_plot() -> RgbImage {
    render::plot_polar(&figure::polar_figure(), POLAR_PLOT_SIZE, POLAR_PLOT_SIZE)
}
